//! Exact-match comparison of component references.

use crate::types::ComponentRef;

/// Binary match between two component references: 1.0 or 0.0, no partial
/// credit.
///
/// `kind` and `name` must be equal (two absent values compare equal).
/// `namespace` is only enforced when at least one side supplies it, so two
/// references that both omit the namespace can still match, while a supplied
/// namespace on one side must be matched by the other.
pub fn component_match(comp1: Option<&ComponentRef>, comp2: Option<&ComponentRef>) -> f64 {
    let (Some(a), Some(b)) = (comp1, comp2) else {
        return 0.0;
    };

    if a.kind != b.kind || a.name != b.name {
        return 0.0;
    }

    if (a.namespace.is_some() || b.namespace.is_some()) && a.namespace != b.namespace {
        return 0.0;
    }

    1.0
}
