use serde::Serialize;
use std::num::Wrapping;

/// When we have separate values it's useful to run a progressive
/// version of djb2 where we pretend that we're still looping over
/// the same value. The static query key seeds the hash, the serialized
/// variables continue it, so the result uniquely identifies
/// (query document, variables).
pub fn progressive_hash<V: Serialize>(h: u32, x: &V) -> u64 {
    let x = bincode::serialize(x).expect("Failed to convert variables to Vec<u8> for hashing");

    let mut h = Wrapping(h as u64);

    for byte in x {
        h = (h << 5) + h + Wrapping(byte as u64)
    }

    h.0
}

/// Build an [Extensions](../type.Extensions.html) map from a list of extension
/// values.
#[macro_export]
macro_rules! ext {
    ($($x: expr),*) => {
        {
            let mut typemap = $crate::ExtensionMap::new();
            $(
                typemap.insert($x);
            )*
            ::std::sync::Arc::new(typemap)
        }
    };
}
