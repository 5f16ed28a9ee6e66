use {
    alloy_primitives::{Address, B256},
    clap::{Args, Parser, Subcommand},
    model::DomainSeparator,
    std::{fmt, path::PathBuf},
};

/// Computes EIP-712 order hashes and packs or extracts order UIDs.
#[derive(Debug, Parser)]
#[clap(name = "order-uid")]
pub struct Arguments {
    /// Log filter directives, e.g. `warn,order_uid=debug`.
    #[clap(long, env, default_value = "warn,order_uid=debug,model=debug")]
    pub log_filter: String,

    /// Output log events as JSON.
    #[clap(long, env)]
    pub use_json_logs: bool,

    #[clap(subcommand)]
    pub command: Command,
}

impl Arguments {
    pub fn observe_config(&self) -> observe::Config {
        observe::Config::new(&self.log_filter, self.use_json_logs)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Computes the type hash and the struct hash of a JSON encoded order.
    Hash {
        #[clap(flatten)]
        order: OrderSource,

        #[clap(flatten)]
        domain: DomainArguments,
    },
    /// Packs an order digest, owner and validTo into an order UID.
    Pack {
        /// The 32 byte order digest.
        #[clap(long)]
        digest: B256,

        /// The address of the order owner.
        #[clap(long)]
        owner: Address,

        /// The order expiry as a Unix timestamp.
        #[clap(long)]
        valid_to: u32,
    },
    /// Extracts the order digest, owner and validTo from a hex encoded order
    /// UID.
    Extract { uid: String },
    /// Computes the order UID of a JSON encoded order placed by `owner`.
    Uid {
        #[clap(flatten)]
        order: OrderSource,

        /// The address of the order owner.
        #[clap(long, env)]
        owner: Address,
    },
}

#[derive(Debug, Args)]
pub struct OrderSource {
    /// Path to the JSON encoded order. The order is read from stdin if this
    /// is omitted.
    #[clap(long = "order", env = "ORDER_FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct DomainArguments {
    /// Chain ID of the EIP-712 domain. When set together with
    /// `--verifying-contract` the order's signing digest is computed as well.
    #[clap(long, env, requires = "verifying_contract")]
    pub chain_id: Option<u64>,

    /// The settlement contract that verifies order signatures.
    #[clap(long, env, requires = "chain_id")]
    pub verifying_contract: Option<Address>,
}

impl DomainArguments {
    pub fn domain_separator(&self) -> Option<DomainSeparator> {
        Some(DomainSeparator::new(self.chain_id?, self.verifying_contract?))
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "log_filter: {}", self.log_filter)?;
        writeln!(f, "use_json_logs: {}", self.use_json_logs)?;
        writeln!(f, "command: {:?}", self.command)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pack() {
        let args = Arguments::try_parse_from([
            "order-uid",
            "pack",
            "--digest",
            "0x0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20",
            "--owner",
            "0x2122232425262728292A2b2C2D2e2f3031323334",
            "--valid-to",
            "892745528",
        ])
        .unwrap();
        assert_eq!(args.log_filter, "warn,order_uid=debug,model=debug");
        assert!(!args.use_json_logs);
        match args.command {
            Command::Pack {
                digest,
                owner,
                valid_to,
            } => {
                assert_eq!(digest.0[0], 1);
                assert_eq!(owner.0[0], 0x21);
                assert_eq!(valid_to, 0x35363738);
            }
            command => panic!("unexpected command {command:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_valid_to() {
        assert!(
            Arguments::try_parse_from([
                "order-uid",
                "pack",
                "--digest",
                "0x0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20",
                "--owner",
                "0x2122232425262728292A2b2C2D2e2f3031323334",
                "--valid-to",
                "4294967296",
            ])
            .is_err()
        );
    }

    #[test]
    fn domain_requires_both_arguments() {
        assert!(Arguments::try_parse_from(["order-uid", "hash", "--chain-id", "1"]).is_err());

        let args = Arguments::try_parse_from([
            "order-uid",
            "hash",
            "--chain-id",
            "5",
            "--verifying-contract",
            "0x9008D19f58AAbD9eD0D60971565AA8510560ab41",
        ])
        .unwrap();
        let Command::Hash { order, domain } = args.command else {
            panic!("expected hash command");
        };
        assert!(order.file.is_none());
        assert!(domain.domain_separator().is_some());
    }

    #[test]
    fn displays_arguments() {
        let args = Arguments::try_parse_from(["order-uid", "extract", "0x00"]).unwrap();
        let display = args.to_string();
        assert!(display.contains("log_filter: warn,order_uid=debug,model=debug"));
        assert!(display.contains("Extract"));
    }
}
