//! Canonical protobuf encoding of the signable deploy fields.
//!
//! The bytes covered by the signature are the protobuf wire encoding of
//! `DeployDataProto`, restricted to the payload fields:
//!
//! ```text
//! message DeployDataProto {
//!   bytes  deployer              = 1; // envelope only, never signed
//!   string term                  = 2;
//!   int64  timestamp             = 3;
//!   bytes  sig                   = 4; // envelope only, never signed
//!   string sigAlgorithm          = 5; // envelope only, never signed
//!   int64  phloPrice             = 7;
//!   int64  phloLimit             = 8;
//!   int64  validAfterBlockNumber = 10;
//! }
//! ```
//!
//! Fields at their proto3 default (empty string, zero) contribute no
//! bytes, and tags are written in ascending numeric order, so the output
//! is byte-exact across implementations. Signature verification on the
//! node depends on that.

use crate::deploy::DeployData;
use crate::error::SigningError;

const TAG_TERM: u32 = 2;
const TAG_TIMESTAMP: u32 = 3;
const TAG_PHLO_PRICE: u32 = 7;
const TAG_PHLO_LIMIT: u32 = 8;
const TAG_VALID_AFTER_BLOCK_NUMBER: u32 = 10;

const WIRE_VARINT: u32 = 0;
const WIRE_LEN_DELIMITED: u32 = 2;

/// Encode the signable subset of a deploy to its canonical byte form.
///
/// Pure function of the payload. Fails only when a numeric field is
/// negative, which has no canonical non-negative varint form.
pub fn encode_deploy_data(data: &DeployData) -> Result<Vec<u8>, SigningError> {
    let mut buf = Vec::with_capacity(data.term.len() + 32);
    write_string(&mut buf, TAG_TERM, &data.term);
    write_int64(&mut buf, TAG_TIMESTAMP, "timestamp", data.timestamp)?;
    write_int64(&mut buf, TAG_PHLO_PRICE, "phloPrice", data.phlo_price)?;
    write_int64(&mut buf, TAG_PHLO_LIMIT, "phloLimit", data.phlo_limit)?;
    write_int64(
        &mut buf,
        TAG_VALID_AFTER_BLOCK_NUMBER,
        "validAfterBlockNumber",
        data.valid_after_block_number,
    )?;
    Ok(buf)
}

fn write_field_key(buf: &mut Vec<u8>, tag: u32, wire_type: u32) {
    write_varint(buf, u64::from(tag << 3 | wire_type));
}

/// Length-delimited UTF-8 string field. Empty strings are omitted.
fn write_string(buf: &mut Vec<u8>, tag: u32, value: &str) {
    if value.is_empty() {
        return;
    }
    write_field_key(buf, tag, WIRE_LEN_DELIMITED);
    write_varint(buf, value.len() as u64);
    buf.extend_from_slice(value.as_bytes());
}

/// Varint int64 field. Zero is omitted; negative values are rejected
/// rather than sign-extended to a ten-byte varint.
fn write_int64(
    buf: &mut Vec<u8>,
    tag: u32,
    field: &'static str,
    value: i64,
) -> Result<(), SigningError> {
    if value < 0 {
        return Err(SigningError::NegativeField { field, value });
    }
    if value == 0 {
        return Ok(());
    }
    write_field_key(buf, tag, WIRE_VARINT);
    write_varint(buf, value as u64);
    Ok(())
}

/// Base-128 varint, least-significant seven bits first.
fn write_varint(buf: &mut Vec<u8>, mut value: u64) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            return;
        }
        buf.push(byte | 0x80);
    }
}
