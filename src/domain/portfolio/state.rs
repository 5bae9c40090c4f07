//! Portfolio state container — app-owned, SDK-provided update logic.

use super::{PortfolioView, PositionRow, UnderlyingGroup};
use crate::domain::position::Position;
use crate::shared::{Symbol, Underlying};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// The two pieces of session state behind the positions table: the current
/// position list and the symbol→quote cache.
///
/// The app owns instances of this type. The SDK provides update methods.
/// The quote cache outlives position-list replacements: a symbol that
/// reappears in a later fetch reuses its cached quote rather than
/// triggering a new resolution. Call [`clear_quotes`](Self::clear_quotes)
/// to force fresh quotes on the next resolution pass.
#[derive(Debug, Clone, Default)]
pub struct PortfolioState {
    positions: Vec<Position>,
    quotes: HashMap<Symbol, Decimal>,
}

impl PortfolioState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the position list wholesale (e.g. from a REST fetch).
    ///
    /// No reconciliation with the prior list; the quote cache is kept.
    pub fn replace_positions(&mut self, positions: Vec<Position>) {
        self.positions = positions;
    }

    /// Merge a resolved quote into the cache. Last write wins per symbol.
    pub fn merge_quote(&mut self, symbol: Symbol, price: Decimal) {
        self.quotes.insert(symbol, price);
    }

    /// Symbols in the current list with no cached quote, deduplicated,
    /// in first-encounter order.
    pub fn unresolved_symbols(&self) -> Vec<Symbol> {
        let mut seen = Vec::new();
        for position in &self.positions {
            if !self.quotes.contains_key(&position.symbol) && !seen.contains(&position.symbol) {
                seen.push(position.symbol.clone());
            }
        }
        seen
    }

    /// Drop all cached quotes so the next resolution pass re-fetches them.
    pub fn clear_quotes(&mut self) {
        self.quotes.clear();
    }

    pub fn quote(&self, symbol: &Symbol) -> Option<Decimal> {
        self.quotes.get(symbol).copied()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Derive the grouped, PnL-annotated view of the current state.
    ///
    /// Recomputed from scratch on every call. Grouping partitions the
    /// position list by underlying key; groups appear in the order their
    /// key was first encountered, and rows keep the list's relative order.
    pub fn view(&self) -> PortfolioView {
        let mut groups: Vec<UnderlyingGroup> = Vec::new();
        let mut index: HashMap<Underlying, usize> = HashMap::new();
        let mut total_pnl = Decimal::ZERO;

        for position in &self.positions {
            let quote = self.quote(&position.symbol);
            let pnl = position.pnl(quote);
            total_pnl += pnl;

            let row = PositionRow {
                position: position.clone(),
                quote,
                pnl,
            };

            let key = position.underlying();
            match index.get(&key).copied() {
                Some(i) => {
                    groups[i].pnl += pnl;
                    groups[i].rows.push(row);
                }
                None => {
                    index.insert(key.clone(), groups.len());
                    groups.push(UnderlyingGroup {
                        underlying: key,
                        rows: vec![row],
                        pnl,
                    });
                }
            }
        }

        PortfolioView { groups, total_pnl }
    }
}
