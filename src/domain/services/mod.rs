//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod sweet_ordering;

pub use sweet_ordering::{
    by_manufacturer, by_name, by_price, by_sugar_weight, by_weight, comparator_for, order_items,
    SweetComparator,
};
