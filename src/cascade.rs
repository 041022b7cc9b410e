//! # Cascade Assigner
//!
//! Partitions a normalized symbol set across an ordered list of CRC
//! polynomials: each pass assigns every still-unassigned symbol that does
//! not collide with another still-unassigned symbol under the pass's
//! polynomial, allocating dense sequential IDs as it goes. Symbols that
//! survive all eight passes without a conflict-free slot make the build
//! fail with [`CascadeError::UnresolvableConflicts`].

use std::collections::HashMap;

use crate::catalog::{self, PolynomialParams};
use crate::crc::CrcTable;
use crate::error::CascadeError;
use crate::logging::log_debug;
use crate::symbol::Symbol;

/// Where one symbol landed: the polynomial that absorbed it, and its dense
/// unique ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub polynomial: &'static PolynomialParams,
    pub unique_id: usize,
}

/// Assigns every symbol in `symbols` to a polynomial in `polynomials_for(crc_width)`,
/// in input order, per the algorithm in the module documentation.
///
/// Returns one [`Assignment`] per input symbol, in input order. Fails with
/// [`CascadeError::UnresolvableConflicts`] if any symbol remains unassigned
/// after every polynomial in the width's cascade has been tried.
pub fn assign(
    symbols: &[Symbol],
    crc_width: u32,
    id_mask: u64,
) -> Result<Vec<Assignment>, CascadeError> {
    let polynomials = catalog::polynomials_for(crc_width)
        .ok_or_else(|| CascadeError::UnknownPolynomial(format!("width {crc_width}")))?;

    let mut result: Vec<Option<Assignment>> = vec![None; symbols.len()];
    let mut remaining: Vec<usize> = (0..symbols.len()).collect();
    let mut next_id = 0usize;

    for p in polynomials {
        if remaining.is_empty() {
            break;
        }

        let table = CrcTable::new(*p);
        let mut buckets: HashMap<u64, Vec<usize>> = HashMap::new();
        for &idx in &remaining {
            let h = table.compute(symbols[idx].as_bytes()) & id_mask;
            buckets.entry(h).or_default().push(idx);
        }

        let mut conflicted = vec![false; symbols.len()];
        for bucket in buckets.values() {
            if bucket.len() >= 2 {
                for &idx in bucket {
                    conflicted[idx] = true;
                }
            }
        }

        let mut newly_assigned = 0usize;
        for &idx in &remaining {
            if !conflicted[idx] {
                result[idx] = Some(Assignment {
                    polynomial: p,
                    unique_id: next_id,
                });
                next_id += 1;
                newly_assigned += 1;
            }
        }
        log_debug(&format!(
            "cascade: {} absorbed {newly_assigned} of {} remaining symbols",
            p.name,
            remaining.len()
        ));

        remaining.retain(|&idx| result[idx].is_none());
    }

    if !remaining.is_empty() {
        return Err(CascadeError::UnresolvableConflicts(remaining.len()));
    }

    Ok(result.into_iter().map(|a| a.unwrap()).collect())
}
