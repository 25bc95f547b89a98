//! Query descriptions translated by the repository layer.
//!
//! Handlers never build SQL. They describe the wanted subset with
//! [`CustomerFilter`] and the repository translates it — to a `WHERE`
//! clause in PostgreSQL, or to plain predicates in the in-memory
//! implementation.

/// Pattern match applied to the customer name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMatch {
    /// Name starts with the keyword.
    Prefix(String),
    /// Name ends with the keyword.
    Suffix(String),
    /// Name contains the keyword anywhere.
    Contains(String),
}

impl NameMatch {
    /// Returns the SQL `LIKE` pattern for this match, with `%`, `_`
    /// and `\` in the keyword escaped.
    #[must_use]
    pub fn like_pattern(&self) -> String {
        match self {
            Self::Prefix(kw) => format!("{}%", escape_like(kw)),
            Self::Suffix(kw) => format!("%{}", escape_like(kw)),
            Self::Contains(kw) => format!("%{}%", escape_like(kw)),
        }
    }

    /// Evaluates this match against a name (case-sensitive).
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Prefix(kw) => name.starts_with(kw.as_str()),
            Self::Suffix(kw) => name.ends_with(kw.as_str()),
            Self::Contains(kw) => name.contains(kw.as_str()),
        }
    }
}

/// Predicate applied to the credit balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditFilter {
    /// Credit is non-zero (positive or negative).
    NotZero,
    /// Credit is strictly greater than the bound.
    GreaterThan(i64),
    /// Credit is in `[min, max)`: minimum inclusive, maximum exclusive.
    Between {
        /// Inclusive lower bound.
        min: i64,
        /// Exclusive upper bound.
        max: i64,
    },
}

impl CreditFilter {
    /// Evaluates this predicate against a credit balance.
    #[must_use]
    pub fn matches(&self, credit: i64) -> bool {
        match *self {
            Self::NotZero => credit != 0,
            Self::GreaterThan(bound) => credit > bound,
            Self::Between { min, max } => credit >= min && credit < max,
        }
    }
}

/// Conjunction of per-field predicates. Absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    /// Name pattern, if any.
    pub name: Option<NameMatch>,
    /// Credit predicate, if any.
    pub credit: Option<CreditFilter>,
}

impl CustomerFilter {
    /// The empty filter, matching every record.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            name: None,
            credit: None,
        }
    }

    /// Filter on the name only.
    #[must_use]
    pub const fn by_name(name: NameMatch) -> Self {
        Self {
            name: Some(name),
            credit: None,
        }
    }

    /// Filter on the credit balance only.
    #[must_use]
    pub const fn by_credit(credit: CreditFilter) -> Self {
        Self {
            name: None,
            credit: Some(credit),
        }
    }

    /// Evaluates the conjunction against a record's fields.
    #[must_use]
    pub fn matches(&self, name: &str, credit: i64) -> bool {
        self.name.as_ref().is_none_or(|m| m.matches(name))
            && self.credit.as_ref().is_none_or(|c| c.matches(credit))
    }
}

/// Ordering applied to list results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerOrder {
    /// Lexicographic ascending order on the name.
    NameAsc,
}

/// Escapes `LIKE` metacharacters in a keyword with a backslash.
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
