pub mod arguments;

use {
    alloy_primitives::{Address, B256, hex},
    anyhow::{Context, Result},
    arguments::{Command, OrderSource},
    model::{
        order::OrderData,
        order_uid::{
            ORDER_UID_LENGTH,
            OrderUid,
            extract_order_uid_params,
            pack_order_uid_params,
        },
    },
    serde::{Deserialize, Serialize},
    std::{
        fs::File,
        io::{BufReader, Read, Write},
    },
};

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashOutput {
    pub type_hash: B256,
    pub struct_hash: B256,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_digest: Option<B256>,
}

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UidOutput {
    pub uid: OrderUid,
}

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UidParamsOutput {
    pub order_digest: B256,
    pub owner: Address,
    pub valid_to: u32,
}

/// Runs a single command. Orders that are not read from a file are read from
/// `input`, the result is written to `output` as JSON.
pub fn run(command: Command, input: impl Read, mut output: impl Write) -> Result<()> {
    match command {
        Command::Hash { order, domain } => {
            let order = read_order(&order, input)?;
            let struct_hash = order.hash_struct();
            let signing_digest = domain
                .domain_separator()
                .map(|domain| order.signing_digest(&domain));
            tracing::debug!(?order, %struct_hash, "hashed order");
            write_json(
                &mut output,
                &HashOutput {
                    type_hash: OrderData::type_hash(),
                    struct_hash,
                    signing_digest,
                },
            )
        }
        Command::Pack {
            digest,
            owner,
            valid_to,
        } => {
            let mut uid = [0u8; ORDER_UID_LENGTH];
            pack_order_uid_params(&mut uid, digest, owner, valid_to)?;
            let uid = OrderUid(uid);
            tracing::debug!(%uid, "packed order uid");
            write_json(&mut output, &UidOutput { uid })
        }
        Command::Extract { uid } => {
            let bytes = hex::decode(uid.strip_prefix("0x").unwrap_or(&uid))
                .with_context(|| format!("{uid:?} is not hex encoded"))?;
            let (order_digest, owner, valid_to) = extract_order_uid_params(&bytes)?;
            tracing::debug!(%order_digest, %owner, valid_to, "extracted order uid");
            write_json(
                &mut output,
                &UidParamsOutput {
                    order_digest,
                    owner,
                    valid_to,
                },
            )
        }
        Command::Uid { order, owner } => {
            let order = read_order(&order, input)?;
            let uid = order.uid(owner);
            tracing::debug!(?order, %owner, %uid, "computed order uid");
            write_json(&mut output, &UidOutput { uid })
        }
    }
}

fn read_order(source: &OrderSource, input: impl Read) -> Result<OrderData> {
    let order = match &source.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open order file {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
        }
        None => serde_json::from_reader(input),
    };
    order.context("failed to parse JSON encoded order")
}

fn write_json(output: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *output, value).context("failed to serialize output")?;
    writeln!(output).context("failed to write output")?;
    Ok(())
}
