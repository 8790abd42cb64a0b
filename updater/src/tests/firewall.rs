use crate::config::Rule;
use crate::firewall::PortChange;
use crate::firewall::PortStatus;
use crate::firewall::ip_permission;

fn rdp_rule() -> Rule {
    Rule {
        security_group_id: "sg-0123456789abcdef0".to_string(),
        port: 3389,
    }
}

#[test]
fn test_permission_pins_the_ip_as_a_single_host() {
    let permission = ip_permission(&rdp_rule(), "203.0.113.42", None);

    assert_eq!(Some("tcp"), permission.ip_protocol());
    assert_eq!(Some(3389), permission.from_port());
    assert_eq!(Some(3389), permission.to_port());

    let ranges = permission.ip_ranges();
    assert_eq!(1, ranges.len());
    assert_eq!(Some("203.0.113.42/32"), ranges[0].cidr_ip());
    assert_eq!(None, ranges[0].description());
}

#[test]
fn test_permission_carries_the_device_name() {
    let permission = ip_permission(&rdp_rule(), "203.0.113.42", Some("my-laptop"));

    assert_eq!(
        Some("my-laptop"),
        permission.ip_ranges()[0].description(),
    );
}

#[test]
fn test_port_change_messages() {
    let change = |status| PortChange { port: 3389, status };

    assert_eq!(
        "Success: Connection to port 3389 is OPEN",
        change(PortStatus::Open).to_string(),
    );
    assert_eq!(
        "Success: Connection to port 3389 is (already) OPEN",
        change(PortStatus::AlreadyOpen).to_string(),
    );
    assert_eq!(
        "Success: Connection to port 3389 CLOSED",
        change(PortStatus::Closed).to_string(),
    );
    assert_eq!(
        "Success: Connection to port 3389 (already) CLOSED",
        change(PortStatus::AlreadyClosed).to_string(),
    );
}
