//! Utilitários compartilhados pelos esquemas

pub mod convert;
pub mod data;

pub use convert::{
    convert_from_angles, convert_from_probability_amplitudes, convert_to_angles,
    convert_to_probability_amplitudes, de_quantize, is_within_range, quantize,
};
pub use data::{
    apply_index_padding, apply_padding, get_bit_depth, get_qubit_count, interleave_channels,
    parse_signed, parse_unsigned, restore_channels, simulate_data,
};
