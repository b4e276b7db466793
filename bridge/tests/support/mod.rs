//! Shared cw-multi-test harness: two bridge/pool pairs standing in for two
//! chains, two CW20 tokens, and secp256k1 keys for users and the authority.

#![allow(dead_code)]

use bridge::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, SwapStateResponse};
use bridge::SignerPolicy;
use common::{EvmAddress, MessageKey, Signature};
use cosmwasm_std::{Addr, Empty, Uint128, Uint256};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use secp256k1::{Message, PublicKey, SecretKey, SECP256K1};

/// 10 tokens with 18 decimals
pub const TEN: u128 = 10_000_000_000_000_000_000;
/// Starting user balance and pool liquidity per token
pub const FUNDING: u128 = 1_000 * TEN;

// ============================================================================
// Keys & Signatures
// ============================================================================

pub fn secret(n: u8) -> SecretKey {
    let mut key = [0u8; 32];
    key[31] = n;
    SecretKey::from_slice(&key).unwrap()
}

pub fn evm_address(sk: &SecretKey) -> Addr {
    let pk = PublicKey::from_secret_key_global(sk);
    let address = EvmAddress::from_uncompressed_pubkey(&pk.serialize_uncompressed()).unwrap();
    Addr::unchecked(address.to_hex())
}

pub fn sign(sk: &SecretKey, message: &MessageKey) -> Signature {
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

// ============================================================================
// Contracts
// ============================================================================

fn contract_bridge() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        bridge::contract::execute,
        bridge::contract::instantiate,
        bridge::contract::query,
    );
    Box::new(contract)
}

fn contract_pool() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        pool::contract::execute,
        pool::contract::instantiate,
        pool::contract::query,
    );
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Environment
// ============================================================================

pub struct Suite {
    pub app: App,
    pub admin: Addr,
    /// Source chain side
    pub bridge_a: Addr,
    pub pool_a: Addr,
    /// Destination chain side
    pub bridge_b: Addr,
    pub pool_b: Addr,
    pub usdt_bsc: Addr,
    pub usdt_eth: Addr,
    pub user_key: SecretKey,
    pub user: Addr,
    pub authority_key: SecretKey,
    pub authority: Addr,
}

/// Both bridges know both symbols. Both pools hold `FUNDING` of each token,
/// the user holds `FUNDING` of each and has approved both pools.
pub fn setup() -> Suite {
    let mut app = App::default();
    let admin = Addr::unchecked("admin");
    let user_key = secret(1);
    let user = evm_address(&user_key);
    let authority_key = secret(2);
    let authority = evm_address(&authority_key);

    let cw20_code = app.store_code(contract_cw20());
    let pool_code = app.store_code(contract_pool());
    let bridge_code = app.store_code(contract_bridge());

    let mut token = |symbol: &str| {
        app.instantiate_contract(
            cw20_code,
            admin.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: format!("Tether {symbol}"),
                symbol: "USDT".to_string(),
                decimals: 18,
                initial_balances: vec![
                    Cw20Coin {
                        address: admin.to_string(),
                        amount: Uint128::new(2 * FUNDING),
                    },
                    Cw20Coin {
                        address: user.to_string(),
                        amount: Uint128::new(FUNDING),
                    },
                ],
                mint: None,
                marketing: None,
            },
            &[],
            symbol,
            None,
        )
        .unwrap()
    };
    let usdt_bsc = token("USDT_BSC");
    let usdt_eth = token("USDT_ETH");

    let mut pair = |label: &str| {
        let pool = app
            .instantiate_contract(
                pool_code,
                admin.clone(),
                &pool::msg::InstantiateMsg {
                    admin: admin.to_string(),
                    bridges: vec![],
                },
                &[],
                format!("pool-{label}"),
                None,
            )
            .unwrap();
        let bridge = app
            .instantiate_contract(
                bridge_code,
                admin.clone(),
                &InstantiateMsg {
                    admin: admin.to_string(),
                    pool: pool.to_string(),
                    swap_policy: SignerPolicy::Sender {},
                    redeem_policy: SignerPolicy::Authority {
                        signer: authority.to_string(),
                    },
                },
                &[],
                format!("bridge-{label}"),
                None,
            )
            .unwrap();
        app.execute_contract(
            admin.clone(),
            pool.clone(),
            &pool::msg::ExecuteMsg::GrantBridge {
                address: bridge.to_string(),
            },
            &[],
        )
        .unwrap();
        (bridge, pool)
    };
    let (bridge_a, pool_a) = pair("a");
    let (bridge_b, pool_b) = pair("b");

    for bridge in [&bridge_a, &bridge_b] {
        for (symbol, token) in [("USDT_BSC", &usdt_bsc), ("USDT_ETH", &usdt_eth)] {
            app.execute_contract(
                admin.clone(),
                bridge.clone(),
                &ExecuteMsg::AddCoin {
                    token: token.to_string(),
                    symbol: symbol.to_string(),
                },
                &[],
            )
            .unwrap();
        }
    }

    for token in [&usdt_bsc, &usdt_eth] {
        for pool in [&pool_a, &pool_b] {
            app.execute_contract(
                admin.clone(),
                token.clone(),
                &Cw20ExecuteMsg::Transfer {
                    recipient: pool.to_string(),
                    amount: Uint128::new(FUNDING),
                },
                &[],
            )
            .unwrap();
            app.execute_contract(
                user.clone(),
                token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: pool.to_string(),
                    amount: Uint128::new(FUNDING),
                    expires: None,
                },
                &[],
            )
            .unwrap();
        }
    }

    Suite {
        app,
        admin,
        bridge_a,
        pool_a,
        bridge_b,
        pool_b,
        usdt_bsc,
        usdt_eth,
        user_key,
        user,
        authority_key,
        authority,
    }
}

// ============================================================================
// Helpers
// ============================================================================

impl Suite {
    pub fn balance(&self, token: &Addr, holder: &Addr) -> u128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &Cw20QueryMsg::Balance {
                    address: holder.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    /// Pool A + pool B + user for one token
    pub fn circulating(&self, token: &Addr) -> u128 {
        self.balance(token, &self.pool_a)
            + self.balance(token, &self.pool_b)
            + self.balance(token, &self.user)
    }

    pub fn swap_state(&self, bridge: &Addr, message: &str) -> SwapStateResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                bridge,
                &QueryMsg::SwapState {
                    message: message.to_string(),
                },
            )
            .unwrap()
    }

    /// Swap on bridge A, signed by the user as the sender policy requires.
    pub fn swap(
        &mut self,
        transaction_number: u128,
        amount: u128,
        symbol_to: &str,
        symbol_from: &str,
    ) -> anyhow::Result<AppResponse> {
        let key = MessageKey::new(
            Uint128::new(transaction_number),
            Uint256::from(amount),
            symbol_to,
        );
        let signature = sign(&self.user_key, &key);
        let bridge = self.bridge_a.clone();
        self.app.execute_contract(
            self.user.clone(),
            bridge,
            &ExecuteMsg::Swap {
                transaction_number: Uint128::new(transaction_number),
                amount: Uint256::from(amount),
                symbol_to: symbol_to.to_string(),
                symbol_from: symbol_from.to_string(),
                signature,
            },
            &[],
        )
    }

    /// Redeem on bridge B with a signature from `signer`.
    pub fn redeem_signed_by(
        &mut self,
        signer: &SecretKey,
        transaction_number: u128,
        amount: u128,
        symbol: &str,
    ) -> anyhow::Result<AppResponse> {
        let key = MessageKey::new(
            Uint128::new(transaction_number),
            Uint256::from(amount),
            symbol,
        );
        let signature = sign(signer, &key);
        let bridge = self.bridge_b.clone();
        self.app.execute_contract(
            self.user.clone(),
            bridge,
            &ExecuteMsg::Redeem {
                transaction_number: Uint128::new(transaction_number),
                amount: Uint256::from(amount),
                symbol: symbol.to_string(),
                signature,
            },
            &[],
        )
    }

    pub fn redeem(
        &mut self,
        transaction_number: u128,
        amount: u128,
        symbol: &str,
    ) -> anyhow::Result<AppResponse> {
        let authority_key = self.authority_key;
        self.redeem_signed_by(&authority_key, transaction_number, amount, symbol)
    }
}
