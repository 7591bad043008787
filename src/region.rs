//! Regions represent different geographical areas in which technologies operate and demand is
//! located.
use crate::id::define_id_type;
use indexmap::IndexSet;

define_id_type! {RegionID}

/// An ordered set of regions, in the order they were first encountered
pub type RegionSet = IndexSet<RegionID>;
