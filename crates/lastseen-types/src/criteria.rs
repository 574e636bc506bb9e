use anyhow::{Result, bail};

/// Which users a report run covers. Exactly one mode is active per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionCriteria {
    /// One specific user, whether or not a login was ever recorded.
    SingleUser { user_id: String },
    /// The `limit` users whose last login lies furthest in the past,
    /// counting users with no recorded login as the least recent.
    LeastRecentlySeen { limit: usize },
    /// Users whose last login happened strictly before `cutoff` (epoch
    /// seconds). Users with no recorded login never match this mode.
    SeenBefore { cutoff: i64, limit: usize },
}

impl SelectionCriteria {
    /// Build criteria from the raw command-line selectors.
    ///
    /// Conflicting selectors and non-positive limits are rejected here,
    /// before any store access happens.
    pub fn from_selectors(
        user_id: Option<String>,
        least_recent: bool,
        before: Option<i64>,
        limit: i64,
    ) -> Result<Self> {
        if user_id.is_some() && least_recent {
            bail!("cannot combine a uid argument with --least-recent");
        }
        if user_id.is_some() && before.is_some() {
            bail!("cannot combine a uid argument with --before");
        }
        if least_recent && before.is_some() {
            bail!("cannot combine --least-recent with --before");
        }

        if limit <= 0 {
            bail!("--limit must be a positive number, got {}", limit);
        }
        let limit = limit as usize;

        Ok(match (user_id, before) {
            (Some(user_id), _) => Self::SingleUser { user_id },
            (None, Some(cutoff)) => Self::SeenBefore { cutoff, limit },
            (None, None) => Self::LeastRecentlySeen { limit },
        })
    }
}
