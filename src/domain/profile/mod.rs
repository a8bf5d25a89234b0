//! Profile module - the client's financial situation.
//!
//! Profiles are created per invocation and never persisted by the engine.

mod client_profile;
mod digital_asset;
mod entity;

pub use client_profile::{
    ClientProfile, ClientProfileBuilder, DEDUCTION_CHARITY_CASH, DEDUCTION_HSA,
    DEDUCTION_IRA_CONTRIBUTION, DEDUCTION_STATE_TAX_PAID,
};
pub use digital_asset::{AssetLot, DigitalAsset, ETF_TYPE};
pub use entity::Entity;
