//! Wire messages and request signing.
//!
//! Transactions are sent as a signed envelope: the message and chain id are
//! serialized to canonical JSON and signed with an EIP-191 personal-sign
//! signature. Storage provider reads are authenticated the same way over a
//! short canonical request string.

use alloy_primitives::Address;
use alloy_signer::{Signer, SignerSync};
use gnfd_primitives::{BucketName, CommitmentMode};
use serde::{Deserialize, Serialize};

use crate::ChainResult;

/// Authorization scheme name for storage provider requests.
pub const SP_AUTH_SCHEME: &str = "GNFD1-ECDSA";

/// Update of a bucket's charged read quota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgUpdateBucketInfo {
    /// Account paying for and authorizing the update.
    pub operator: Address,
    /// Bucket being updated.
    pub bucket_name: String,
    /// New charged read quota in bytes, encoded as a decimal string.
    pub charged_read_quota: String,
}

impl MsgUpdateBucketInfo {
    /// Message setting `bucket`'s charged read quota to `target_quota`.
    pub fn charged_read_quota(operator: Address, bucket: &BucketName, target_quota: u64) -> Self {
        Self {
            operator,
            bucket_name: bucket.to_string(),
            charged_read_quota: target_quota.to_string(),
        }
    }
}

/// The part of a transaction covered by the signature.
#[derive(Debug, Serialize)]
struct SignDoc<'a> {
    chain_id: &'a str,
    msg: &'a MsgUpdateBucketInfo,
}

/// Signed transaction envelope posted to the broadcast endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastRequest {
    pub chain_id: String,
    pub mode: String,
    pub msg: MsgUpdateBucketInfo,
    pub signer: Address,
    /// `0x`-prefixed 65-byte signature.
    pub signature: String,
}

impl BroadcastRequest {
    /// Sign `msg` for `chain_id` and wrap it with the broadcast mode.
    pub fn sign<S>(
        signer: &S,
        chain_id: &str,
        msg: MsgUpdateBucketInfo,
        commitment: CommitmentMode,
    ) -> ChainResult<Self>
    where
        S: SignerSync + Signer,
    {
        let doc = serde_json::to_vec(&SignDoc {
            chain_id,
            msg: &msg,
        })?;
        let signature = sign_bytes(signer, &doc)?;

        Ok(Self {
            chain_id: chain_id.to_string(),
            mode: commitment.broadcast_mode().to_string(),
            msg,
            signer: signer.address(),
            signature,
        })
    }
}

/// Canonical string signed for a read quota request.
pub fn read_quota_string_to_sign(bucket: &BucketName, year_month: &str) -> String {
    format!("GET\n/{bucket}\nread-quota&year-month={year_month}")
}

/// `Authorization` header value for a storage provider request.
pub fn sp_authorization<S>(signer: &S, string_to_sign: &str) -> ChainResult<String>
where
    S: SignerSync,
{
    let signature = sign_bytes(signer, string_to_sign.as_bytes())?;
    Ok(format!("{SP_AUTH_SCHEME}, Signature={signature}"))
}

fn sign_bytes<S: SignerSync>(signer: &S, bytes: &[u8]) -> ChainResult<String> {
    let signature = signer.sign_message_sync(bytes)?;
    Ok(format!("0x{}", hex::encode(signature.as_bytes())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_signer_local::PrivateKeySigner;

    fn bucket() -> BucketName {
        BucketName::new("b1").unwrap()
    }

    #[test]
    fn test_msg_encodes_quota_as_string() {
        let msg = MsgUpdateBucketInfo::charged_read_quota(Address::ZERO, &bucket(), 1_000_000);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["bucket_name"], "b1");
        assert_eq!(json["charged_read_quota"], "1000000");
    }

    #[test]
    fn test_signature_recovers_signer() {
        let signer = PrivateKeySigner::random();
        let msg = MsgUpdateBucketInfo::charged_read_quota(signer.address(), &bucket(), 42);
        let request = BroadcastRequest::sign(
            &signer,
            "greenfield_1017-1",
            msg.clone(),
            CommitmentMode::Inclusion,
        )
        .unwrap();

        assert_eq!(request.mode, "BROADCAST_MODE_BLOCK");
        assert_eq!(request.signer, signer.address());

        let raw = hex::decode(request.signature.trim_start_matches("0x")).unwrap();
        let signature = alloy_primitives::Signature::try_from(raw.as_slice()).unwrap();
        let doc = serde_json::to_vec(&SignDoc {
            chain_id: "greenfield_1017-1",
            msg: &msg,
        })
        .unwrap();
        let recovered = signature.recover_address_from_msg(&doc).unwrap();
        assert_eq!(recovered, signer.address());
    }

    #[test]
    fn test_sp_authorization_header() {
        let signer = PrivateKeySigner::random();
        let header =
            sp_authorization(&signer, &read_quota_string_to_sign(&bucket(), "2026-10")).unwrap();
        assert!(header.starts_with("GNFD1-ECDSA, Signature=0x"));
        // 65 bytes hex encoded
        assert_eq!(header.len(), "GNFD1-ECDSA, Signature=0x".len() + 130);
    }
}
