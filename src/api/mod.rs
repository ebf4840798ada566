//! HTTP API module for the Leave and Compensation Engine.
//!
//! This module provides the REST API endpoints the presentation layer calls
//! with record snapshots to obtain derived values: leave pre-checks,
//! balances, CTC totals and payslip computations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BalanceRequest, PayslipRequest, PrecheckRequest, VisiblePayslipsRequest,
};
pub use response::{ApiError, BalanceResponse, ExcessWarning, PrecheckResponse};
pub use state::AppState;
