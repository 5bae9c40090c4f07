//! Portfolio domain — grouping positions by underlying and aggregating PnL.
//!
//! The position list and the symbol→quote cache live in an app-owned
//! [`PortfolioState`]; [`PortfolioState::view`] derives the grouped,
//! PnL-annotated table from scratch on every call. Groups have no identity
//! of their own beyond the current position list.

#[cfg(feature = "http")]
pub mod client;
pub mod state;

pub use state::PortfolioState;

use crate::domain::position::Position;
use crate::shared::fmt::two_dp;
use crate::shared::Underlying;
use rust_decimal::Decimal;

/// Placeholder shown in the LTP cell while a quote is unresolved.
const LTP_PENDING: &str = "Fetching...";

/// Placeholder shown in the PnL cell while a quote is unresolved.
const PNL_PENDING: &str = "Calculating...";

/// The derived, render-ready portfolio: groups in first-encounter order
/// plus the grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioView {
    pub groups: Vec<UnderlyingGroup>,
    pub total_pnl: Decimal,
}

impl PortfolioView {
    pub fn total_pnl_display(&self) -> String {
        two_dp(&self.total_pnl)
    }
}

/// All positions sharing an underlying key, with their summed PnL.
#[derive(Debug, Clone, PartialEq)]
pub struct UnderlyingGroup {
    pub underlying: Underlying,
    pub rows: Vec<PositionRow>,
    pub pnl: Decimal,
}

impl UnderlyingGroup {
    pub fn pnl_display(&self) -> String {
        two_dp(&self.pnl)
    }
}

/// One table row: a position, its resolved quote (if any), and its PnL.
///
/// `pnl` is always computed — with the average price substituted while the
/// quote is unresolved — so group and total sums never wait on resolution.
/// The display helpers are what show the pending placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionRow {
    pub position: Position,
    pub quote: Option<Decimal>,
    pub pnl: Decimal,
}

impl PositionRow {
    pub fn average_price_display(&self) -> String {
        two_dp(&self.position.average_price)
    }

    pub fn ltp_display(&self) -> String {
        match self.quote {
            Some(ltp) => two_dp(&ltp),
            None => LTP_PENDING.to_string(),
        }
    }

    pub fn pnl_display(&self) -> String {
        match self.quote {
            Some(_) => two_dp(&self.pnl),
            None => PNL_PENDING.to_string(),
        }
    }
}
