//! Selection configuration and the parameter resolver
//!
//! A selection is described either by explicit [`IndexList`]s or by the
//! range options of [`SelectionConfig`]. [`SelectionSpec::resolve`] turns
//! both into one of three canonical forms so extractors never deal with
//! precedence rules themselves.

use crate::index::{Axis, IndexList};

/// Range options a host exposes for sub-matrix selection
///
/// Range bounds are inclusive. Serialized names match the option names
/// hosts forward (`rowCheckBox`, `rowStartSpinBox`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectionConfig {
    /// Enable range selection on rows
    #[cfg_attr(feature = "serde", serde(rename = "rowCheckBox"))]
    pub row_range_enabled: bool,
    /// Enable range selection on columns
    #[cfg_attr(feature = "serde", serde(rename = "columnCheckBox"))]
    pub col_range_enabled: bool,
    /// First selected row
    #[cfg_attr(feature = "serde", serde(rename = "rowStartSpinBox"))]
    pub row_start: i64,
    /// Last selected row
    #[cfg_attr(feature = "serde", serde(rename = "rowEndSpinBox"))]
    pub row_end: i64,
    /// First selected column
    #[cfg_attr(feature = "serde", serde(rename = "columnStartSpinBox"))]
    pub col_start: i64,
    /// Last selected column
    #[cfg_attr(feature = "serde", serde(rename = "columnEndSpinBox"))]
    pub col_end: i64,
}

impl SelectionConfig {
    /// Create a config with both ranges disabled
    pub const fn new() -> Self {
        Self {
            row_range_enabled: false,
            col_range_enabled: false,
            row_start: 0,
            row_end: 0,
            col_start: 0,
            col_end: 0,
        }
    }

    /// Enable the inclusive row range `[start, end]`
    pub const fn with_row_range(mut self, start: i64, end: i64) -> Self {
        self.row_range_enabled = true;
        self.row_start = start;
        self.row_end = end;
        self
    }

    /// Enable the inclusive column range `[start, end]`
    pub const fn with_col_range(mut self, start: i64, end: i64) -> Self {
        self.col_range_enabled = true;
        self.col_start = start;
        self.col_end = end;
        self
    }

    /// Whether any range toggle is set
    pub const fn any_range_enabled(&self) -> bool {
        self.row_range_enabled || self.col_range_enabled
    }
}

/// Non-fatal diagnostic produced during a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remark {
    /// Index lists were supplied, so range settings were not used
    RangeSettingsIgnored,
    /// No extractor recognized the input; it was passed through unchanged
    NoSelectionCriteria,
    /// Input was missing or had a zero dimension; an empty result was produced
    EmptyInput,
}

impl core::fmt::Display for Remark {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Remark::RangeSettingsIgnored => {
                "index matrices detected on inputs (indexing starts from 0), ignoring range settings"
            }
            Remark::NoSelectionCriteria => {
                "no row or column selection could be applied, copying input matrix to output"
            }
            Remark::EmptyInput => "no valid input: input matrix is missing or empty",
        };
        write!(f, "{msg}")
    }
}

/// Unvalidated block expressed as start and length per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub row_start: i64,
    pub row_len: i64,
    pub col_start: i64,
    pub col_len: i64,
}

impl BlockRange {
    /// Start and length on one axis
    pub const fn axis(&self, axis: Axis) -> (i64, i64) {
        match axis {
            Axis::Row => (self.row_start, self.row_len),
            Axis::Col => (self.col_start, self.col_len),
        }
    }
}

/// Canonical selection produced by the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionSpec {
    /// Return the input unchanged
    Passthrough,
    /// Contiguous block from range options
    Range(BlockRange),
    /// Explicit indices; an empty list selects the whole axis
    Explicit { rows: IndexList, cols: IndexList },
}

/// Resolver output: the canonical selection plus any diagnostic it raised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub spec: SelectionSpec,
    pub remark: Option<Remark>,
}

impl SelectionSpec {
    /// Resolve index lists and range options against a matrix of `dims`
    ///
    /// Non-empty index lists take precedence over range options. Without
    /// lists, an enabled axis becomes `start, end - start + 1` and a
    /// disabled axis covers the whole dimension.
    pub fn resolve(
        config: &SelectionConfig,
        dims: (usize, usize),
        rows: Option<&IndexList>,
        cols: Option<&IndexList>,
    ) -> Resolution {
        let rows = rows.filter(|list| !list.is_empty());
        let cols = cols.filter(|list| !list.is_empty());

        if rows.is_some() || cols.is_some() {
            let remark = config
                .any_range_enabled()
                .then_some(Remark::RangeSettingsIgnored);
            return Resolution {
                spec: SelectionSpec::Explicit {
                    rows: rows.cloned().unwrap_or_default(),
                    cols: cols.cloned().unwrap_or_default(),
                },
                remark,
            };
        }

        if !config.any_range_enabled() {
            return Resolution {
                spec: SelectionSpec::Passthrough,
                remark: None,
            };
        }

        let (nrows, ncols) = dims;
        let (row_start, row_len) = if config.row_range_enabled {
            (config.row_start, inclusive_len(config.row_start, config.row_end))
        } else {
            (0, nrows as i64)
        };
        let (col_start, col_len) = if config.col_range_enabled {
            (config.col_start, inclusive_len(config.col_start, config.col_end))
        } else {
            (0, ncols as i64)
        };

        Resolution {
            spec: SelectionSpec::Range(BlockRange {
                row_start,
                row_len,
                col_start,
                col_len,
            }),
            remark: None,
        }
    }
}

/// Length of the inclusive range `[start, end]`
///
/// Saturates instead of overflowing, so extreme bounds still reach the
/// validator and fail there.
const fn inclusive_len(start: i64, end: i64) -> i64 {
    end.saturating_sub(start).saturating_add(1)
}
