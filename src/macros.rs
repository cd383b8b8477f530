//! Convenience macros for working with KNX addresses and types.
//!
//! This module provides declarative macros that simplify common KNX operations
//! and make code more readable and concise.

/// Creates a [`GroupAddress`](crate::addressing::GroupAddress) from 3-level notation.
///
/// The `ga!` macro provides a clean, intuitive syntax for creating group addresses
/// using the familiar KNX 3-level notation (main/middle/sub).
///
/// # Syntax
///
/// ```text
/// ga!(main/middle/sub)
/// ```
///
/// Where:
/// - `main`: Main group (0-31)
/// - `middle`: Middle group (0-7)
/// - `sub`: Sub group (0-255)
///
/// # Examples
///
/// ```rust
/// use knx_groupsocket::ga;
///
/// let temp_sensor = ga!(1/2/10);
/// let light_switch = ga!(2/1/5);
/// assert_eq!(temp_sensor.to_string(), "1/2/10");
/// ```
///
/// # Compile-Time Validation
///
/// The macro validates address components at compile time:
///
/// ```compile_fail
/// // This will fail to compile: main group > 31
/// let addr = knx_groupsocket::ga!(32/0/0);
/// ```
///
/// ```compile_fail
/// // This will fail to compile: middle group > 7
/// let addr = knx_groupsocket::ga!(1/8/0);
/// ```
#[macro_export]
macro_rules! ga {
    ($main:literal / $middle:literal / $sub:literal) => {{
        // Compile-time validation
        const _: () = {
            if $main > 31 {
                panic!("Main group must be 0-31");
            }
            if $middle > 7 {
                panic!("Middle group must be 0-7");
            }
            if $sub > 255 {
                panic!("Sub group must be 0-255");
            }
        };

        // MMMMMIII SSSSSSSS (5 bits main, 3 bits middle, 8 bits sub)
        const RAW: u16 = (($main & 0x1F) << 11) | (($middle & 0x07) << 8) | ($sub & 0xFF);
        $crate::addressing::GroupAddress::from(RAW)
    }};
}

/// Creates an [`IndividualAddress`](crate::addressing::IndividualAddress)
/// from its area, line and device numbers.
///
/// Dotted notation cannot be matched by a macro (`1.1` lexes as a float),
/// so the parts are comma separated.
///
/// # Examples
///
/// ```rust
/// use knx_groupsocket::ia;
///
/// let actuator = ia!(1, 1, 5);
/// assert_eq!(actuator.to_string(), "1.1.5");
/// ```
///
/// ```compile_fail
/// // This will fail to compile: line > 15
/// let addr = knx_groupsocket::ia!(1, 16, 0);
/// ```
#[macro_export]
macro_rules! ia {
    ($area:literal, $line:literal, $device:literal) => {{
        const _: () = {
            if $area > 15 {
                panic!("Area must be 0-15");
            }
            if $line > 15 {
                panic!("Line must be 0-15");
            }
            if $device > 255 {
                panic!("Device must be 0-255");
            }
        };

        // AAAALLLL DDDDDDDD
        const RAW: u16 = (($area & 0x0F) << 12) | (($line & 0x0F) << 8) | ($device & 0xFF);
        $crate::addressing::IndividualAddress::from(RAW)
    }};
}

/// Registers multiple DPT type mappings in a single block.
///
/// Simplifies batch registration of group addresses with their datapoint
/// types in a [`DptStore`](crate::store::DptStore) (or anything else with a
/// matching `set` method). Later entries for the same address win.
///
/// # Syntax
///
/// ```text
/// register_dpts! {
///     store,
///     main/middle/sub => DptN,
///     ...
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use knx_groupsocket::{ga, register_dpts, DatapointType, DptStore};
///
/// let mut store = DptStore::new();
/// register_dpts! {
///     store,
///     1/2/3 => Dpt9,
///     1/2/4 => Dpt1,
///     2/1/10 => Dpt5,
/// }
///
/// assert_eq!(store.len(), 3);
/// assert_eq!(store.get(ga!(1/2/3)), Some(DatapointType::Dpt9));
/// ```
///
/// # Equivalent Code
///
/// ```rust
/// use knx_groupsocket::{ga, DatapointType, DptStore};
///
/// let mut store = DptStore::new();
/// store.set(ga!(1/2/3), DatapointType::Dpt9);
/// store.set(ga!(1/2/4), DatapointType::Dpt1);
/// ```
#[macro_export]
macro_rules! register_dpts {
    ($store:expr, $( $main:literal / $middle:literal / $sub:literal => $dpt:ident ),* $(,)?) => {{
        $(
            $store.set(
                $crate::ga!($main / $middle / $sub),
                $crate::dpt::DatapointType::$dpt,
            );
        )*
    }};
}
