//! Security-group ingress management

use std::fmt;

use anyhow::Context;
use anyhow::Result;
use aws_config::BehaviorVersion;
use aws_sdk_ec2::Client;
use aws_sdk_ec2::error::ProvideErrorMetadata;
use aws_sdk_ec2::types::IpPermission;
use aws_sdk_ec2::types::IpRange;

use crate::config::Config;
use crate::config::Rule;
use crate::public_ip;

// EC2 error codes for rules already in the requested state
const ALREADY_OPEN: &str = "InvalidPermission.Duplicate";
const ALREADY_CLOSED: &str = "InvalidPermission.NotFound";

/// Opens and closes security-group ports for the current public IP
pub struct FirewallManager {
    client: Client,
    public_ip: String,
    device_name: Option<String>,
}

impl FirewallManager {
    /// Resolve the public IP and connect to AWS
    ///
    /// Credentials and region come from the ambient SDK configuration
    /// chain (environment, profile, instance metadata).
    ///
    /// # Errors
    ///
    /// Will return `Err` when the echo endpoint cannot be reached
    pub async fn new(config: &Config) -> Result<Self> {
        let public_ip = public_ip::fetch(&config.ip_server).await?;

        tracing::info!("Current public IP is {public_ip}");

        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;

        Ok(Self {
            client: Client::new(&sdk_config),
            public_ip,
            device_name: config.device_name.clone(),
        })
    }

    /// Allow the current public IP on every configured port
    ///
    /// # Errors
    ///
    /// Will return `Err` on the first rule AWS rejects, except for rules
    /// that already exist
    pub async fn open_ports(&self, rules: &[Rule]) -> Result<Vec<PortChange>> {
        let mut changes = Vec::with_capacity(rules.len());

        for rule in rules {
            changes.push(self.open_port(rule).await?);
        }

        Ok(changes)
    }

    async fn open_port(&self, rule: &Rule) -> Result<PortChange> {
        let result = self
            .client
            .authorize_security_group_ingress()
            .group_id(&rule.security_group_id)
            .ip_permissions(self.ip_permission(rule))
            .send()
            .await;

        let status = match result {
            Ok(_) => PortStatus::Open,
            Err(error) if error.code() == Some(ALREADY_OPEN) => PortStatus::AlreadyOpen,
            Err(error) => {
                return Err(error).with_context(|| {
                    format!(
                        "couldn't open port {} on {}",
                        rule.port, rule.security_group_id,
                    )
                });
            }
        };

        Ok(PortChange {
            port: rule.port,
            status,
        })
    }

    /// Remove the current public IP from every configured port
    ///
    /// # Errors
    ///
    /// Will return `Err` on the first rule AWS rejects, except for rules
    /// that are already gone
    pub async fn close_ports(&self, rules: &[Rule]) -> Result<Vec<PortChange>> {
        let mut changes = Vec::with_capacity(rules.len());

        for rule in rules {
            changes.push(self.close_port(rule).await?);
        }

        Ok(changes)
    }

    async fn close_port(&self, rule: &Rule) -> Result<PortChange> {
        let result = self
            .client
            .revoke_security_group_ingress()
            .group_id(&rule.security_group_id)
            .ip_permissions(self.ip_permission(rule))
            .send()
            .await;

        let status = match result {
            Ok(_) => PortStatus::Closed,
            Err(error) if error.code() == Some(ALREADY_CLOSED) => PortStatus::AlreadyClosed,
            Err(error) => {
                return Err(error).with_context(|| {
                    format!(
                        "couldn't close port {} on {}",
                        rule.port, rule.security_group_id,
                    )
                });
            }
        };

        Ok(PortChange {
            port: rule.port,
            status,
        })
    }

    fn ip_permission(&self, rule: &Rule) -> IpPermission {
        ip_permission(rule, &self.public_ip, self.device_name.as_deref())
    }
}

/// The single-host `tcp` ingress permission for one configured port
pub fn ip_permission(rule: &Rule, public_ip: &str, device_name: Option<&str>) -> IpPermission {
    let mut range = IpRange::builder().cidr_ip(format!("{public_ip}/32"));

    if let Some(device_name) = device_name {
        range = range.description(device_name);
    }

    IpPermission::builder()
        .ip_protocol("tcp")
        .from_port(i32::from(rule.port))
        .to_port(i32::from(rule.port))
        .ip_ranges(range.build())
        .build()
}

/// What happened to one configured port
#[derive(Debug, PartialEq, Eq)]
pub struct PortChange {
    pub port: u16,
    pub status: PortStatus,
}

#[derive(Debug, PartialEq, Eq)]
pub enum PortStatus {
    Open,
    AlreadyOpen,
    Closed,
    AlreadyClosed,
}

impl fmt::Display for PortChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let port = self.port;

        match self.status {
            PortStatus::Open => write!(f, "Success: Connection to port {port} is OPEN"),
            PortStatus::AlreadyOpen => {
                write!(f, "Success: Connection to port {port} is (already) OPEN")
            }
            PortStatus::Closed => write!(f, "Success: Connection to port {port} CLOSED"),
            PortStatus::AlreadyClosed => {
                write!(f, "Success: Connection to port {port} (already) CLOSED")
            }
        }
    }
}
