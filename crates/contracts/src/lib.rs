//! Contract bindings and transaction clients for the Collective Governance
//! suite.
//!
//! This crate wraps the externally deployed governance, voting storage,
//! metadata, treasury, and community-class contracts behind typed async
//! clients. Interface descriptors (JSON ABIs) are loaded from a configured
//! directory and bound to deployed addresses through one wallet-backed HTTP
//! provider; builder wrappers configure remote state call by call and extract
//! the created address from the terminal transaction's events. No contract
//! logic runs locally.
//!
//! # Example
//!
//! ```no_run
//! use alloy::primitives::Address;
//! use collective_rs_contracts::Collective;
//!
//! #[tokio::main]
//! async fn main() -> collective_rs_contracts::Result<()> {
//!     let client = Collective::new(
//!         "./abi",
//!         "https://eth.llamarpc.com",
//!         "0x...", // private key
//!     )?;
//!
//!     let builder_address: Address = "0x...".parse().unwrap();
//!     let builder = client.governance_builder(builder_address)?;
//!     let governance = builder
//!         .a_governance()
//!         .await?
//!         .with_name("collective")
//!         .await?
//!         .with_supervisor(client.signer_address())
//!         .await?
//!         .build()
//!         .await?;
//!
//!     let governance = client.governance(governance)?;
//!     let proposal_id = governance.propose().await?;
//!     governance.start_vote(proposal_id).await?;
//!     Ok(())
//! }
//! ```

pub mod abi;
pub mod binding;
pub mod client;
pub mod codec;
pub mod community_builder;
pub mod error;
pub mod events;
pub mod governance;
pub mod governance_builder;
pub mod meta;
pub mod proposal_builder;
pub mod provider;
pub mod signature;
pub mod storage;
pub mod treasury;
pub mod treasury_builder;

pub use binding::Binding;
pub use client::Collective;
pub use community_builder::CommunityBuilder;
pub use error::{ContractError, Result};
pub use events::TransactionOutcome;
pub use governance::Governance;
pub use governance_builder::{ContractSuite, GovernanceBuilder};
pub use meta::{Meta, MetaValue};
pub use proposal_builder::ProposalBuilder;
pub use provider::HttpProvider;
pub use signature::TreasuryTransaction;
pub use storage::{Choice, Storage};
pub use treasury::Treasury;
pub use treasury_builder::TreasuryBuilder;
