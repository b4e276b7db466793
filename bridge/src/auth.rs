//! Signature-based authorization.
//!
//! A request is authorized by an EIP-191 signature over its message key. The
//! signer is recovered with the host's `secp256k1_recover_pubkey` and turned
//! into an EVM address; a [`SignerPolicy`] then decides whether that address
//! may authorize the call.

use common::{EvmAddress, MessageKey, Signature};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api};

use crate::error::ContractError;

/// Trust model applied to a recovered signer.
#[cw_serde]
pub enum SignerPolicy {
    /// The signer must be the account calling the bridge. The host chain
    /// must use EVM-style `0x` hex account addresses.
    Sender {},
    /// The signer must be this oracle address (`0x` hex).
    Authority { signer: String },
}

impl SignerPolicy {
    /// Normalise the authority address to lowercase `0x` hex.
    pub fn validated(self) -> Result<Self, ContractError> {
        match self {
            SignerPolicy::Sender {} => Ok(SignerPolicy::Sender {}),
            SignerPolicy::Authority { signer } => {
                let signer: EvmAddress = signer.parse()?;
                Ok(SignerPolicy::Authority {
                    signer: signer.to_hex(),
                })
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SignerPolicy::Sender {} => "sender",
            SignerPolicy::Authority { .. } => "authority",
        }
    }
}

/// Decides whether a signature authorizes `sender` to act on `message`.
pub trait Authorizer {
    /// Returns the recovered signer on success.
    fn authorize(
        &self,
        api: &dyn Api,
        message: &MessageKey,
        signature: &Signature,
        sender: &Addr,
    ) -> Result<EvmAddress, ContractError>;
}

impl Authorizer for SignerPolicy {
    fn authorize(
        &self,
        api: &dyn Api,
        message: &MessageKey,
        signature: &Signature,
        sender: &Addr,
    ) -> Result<EvmAddress, ContractError> {
        let recovered = recover_signer(api, message, signature)?;
        let recovered_hex = recovered.to_hex();

        let expected = match self {
            SignerPolicy::Sender {} => sender.as_str(),
            SignerPolicy::Authority { signer } => signer.as_str(),
        };
        if !expected.eq_ignore_ascii_case(&recovered_hex) {
            return Err(ContractError::UnauthorizedSigner {
                expected: expected.to_string(),
                recovered: recovered_hex,
            });
        }

        Ok(recovered)
    }
}

/// Recover the EVM address that signed `message`.
pub fn recover_signer(
    api: &dyn Api,
    message: &MessageKey,
    signature: &Signature,
) -> Result<EvmAddress, ContractError> {
    let recovery_param = signature.recovery_param()?;
    let compact = signature.compact()?;

    let pubkey = api
        .secp256k1_recover_pubkey(&message.signing_digest(), &compact, recovery_param)
        .map_err(|e| ContractError::InvalidSignature {
            reason: e.to_string(),
        })?;

    Ok(EvmAddress::from_uncompressed_pubkey(&pubkey)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockApi;
    use cosmwasm_std::{Binary, Uint128, Uint256};
    use secp256k1::{Message, PublicKey, SecretKey, SECP256K1};

    fn secret(n: u8) -> SecretKey {
        let mut key = [0u8; 32];
        key[31] = n;
        SecretKey::from_slice(&key).unwrap()
    }

    fn address(sk: &SecretKey) -> EvmAddress {
        let pk = PublicKey::from_secret_key_global(sk);
        EvmAddress::from_uncompressed_pubkey(&pk.serialize_uncompressed()).unwrap()
    }

    fn sign(sk: &SecretKey, message: &MessageKey) -> Signature {
        let digest = Message::from_digest(message.signing_digest());
        let (recovery_id, compact) = SECP256K1
            .sign_ecdsa_recoverable(&digest, sk)
            .serialize_compact();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&compact[..32]);
        s.copy_from_slice(&compact[32..]);
        Signature::new(27 + recovery_id.to_i32() as u8, r, s)
    }

    fn reference_key() -> MessageKey {
        MessageKey::new(
            Uint128::one(),
            Uint256::from(10_000_000_000_000_000_000u128),
            "USDT_ETH",
        )
    }

    #[test]
    fn test_recover_round_trip() {
        let api = MockApi::default();
        let key = reference_key();
        for n in [1u8, 2, 7, 200] {
            let sk = secret(n);
            let recovered = recover_signer(&api, &key, &sign(&sk, &key)).unwrap();
            assert_eq!(recovered, address(&sk));
        }
    }

    #[test]
    fn test_zero_one_recovery_ids_accepted() {
        let api = MockApi::default();
        let key = reference_key();
        let sk = secret(3);
        let mut sig = sign(&sk, &key);
        sig.v -= 27;
        assert_eq!(recover_signer(&api, &key, &sig).unwrap(), address(&sk));
    }

    #[test]
    fn test_signature_over_other_message_recovers_other_address() {
        let api = MockApi::default();
        let sk = secret(4);
        let signed = reference_key();
        let other = MessageKey::new(Uint128::new(2), Uint256::from(1u8), "USDT_ETH");

        let recovered = recover_signer(&api, &other, &sign(&sk, &signed)).unwrap();
        assert_ne!(recovered, address(&sk));
    }

    #[test]
    fn test_malformed_signature_rejected() {
        let api = MockApi::default();
        let key = reference_key();

        let bad_v = Signature::new(35, [1; 32], [1; 32]);
        assert!(matches!(
            recover_signer(&api, &key, &bad_v),
            Err(ContractError::InvalidSignature { .. })
        ));

        let short = Signature {
            v: 27,
            r: Binary::from(vec![1u8; 20]),
            s: Binary::from(vec![1u8; 32]),
        };
        assert!(matches!(
            recover_signer(&api, &key, &short),
            Err(ContractError::InvalidSignature { .. })
        ));

        let zero = Signature::new(27, [0; 32], [0; 32]);
        assert!(matches!(
            recover_signer(&api, &key, &zero),
            Err(ContractError::InvalidSignature { .. })
        ));
    }

    #[test]
    fn test_authority_policy() {
        let api = MockApi::default();
        let key = reference_key();
        let oracle = secret(9);
        let policy = SignerPolicy::Authority {
            signer: address(&oracle).to_hex(),
        };
        let caller = Addr::unchecked("anyone");

        let signer = policy
            .authorize(&api, &key, &sign(&oracle, &key), &caller)
            .unwrap();
        assert_eq!(signer, address(&oracle));

        let err = policy
            .authorize(&api, &key, &sign(&secret(10), &key), &caller)
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::UnauthorizedSigner {
                expected: address(&oracle).to_hex(),
                recovered: address(&secret(10)).to_hex(),
            }
        );
    }

    #[test]
    fn test_sender_policy() {
        let api = MockApi::default();
        let key = reference_key();
        let user = secret(11);
        let caller = Addr::unchecked(address(&user).to_hex());

        SignerPolicy::Sender {}
            .authorize(&api, &key, &sign(&user, &key), &caller)
            .unwrap();

        let someone_else = Addr::unchecked(address(&secret(12)).to_hex());
        let err = SignerPolicy::Sender {}
            .authorize(&api, &key, &sign(&user, &key), &someone_else)
            .unwrap_err();
        assert!(matches!(err, ContractError::UnauthorizedSigner { .. }));
    }

    #[test]
    fn test_validated_normalises_authority() {
        let policy = SignerPolicy::Authority {
            signer: "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf".to_string(),
        }
        .validated()
        .unwrap();
        assert_eq!(
            policy,
            SignerPolicy::Authority {
                signer: "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf".to_string()
            }
        );

        let err = SignerPolicy::Authority {
            signer: "terra1xyz".to_string(),
        }
        .validated()
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidAddress { .. }));
    }
}
