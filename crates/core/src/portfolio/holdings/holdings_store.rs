//! Session-owned holding list.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use crate::errors::{Error, Result};

use super::Holding;

/// Ordered list of holdings that is swapped as a whole.
///
/// Readers get an `Arc` to one complete list and never observe a
/// half-applied update.
#[derive(Debug)]
pub struct HoldingStore {
    current: RwLock<Arc<Vec<Holding>>>,
}

impl HoldingStore {
    /// Validates every holding and rejects duplicate ids.
    pub fn new(holdings: Vec<Holding>) -> Result<Self> {
        ensure_consistent(&holdings)?;
        Ok(Self {
            current: RwLock::new(Arc::new(holdings)),
        })
    }

    /// Latest complete holding list.
    pub fn current(&self) -> Arc<Vec<Holding>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the list in a single assignment.
    pub(crate) fn replace(&self, holdings: Vec<Holding>) {
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(holdings);
    }

    pub fn len(&self) -> usize {
        self.current().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current().is_empty()
    }
}

fn ensure_consistent(holdings: &[Holding]) -> Result<()> {
    let mut seen = HashSet::with_capacity(holdings.len());
    for holding in holdings {
        holding.validate()?;
        if !seen.insert(holding.id.as_str()) {
            return Err(Error::ConstraintViolation(format!(
                "Duplicate holding id '{}' ({})",
                holding.id, holding.symbol
            )));
        }
    }
    Ok(())
}
