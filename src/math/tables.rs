// ============================================================================
// Constant Tables
// Precomputed logarithms and arctangents in Q35.28
// ============================================================================

/// `ln(2^k)` for `k = 35` down to `k = 1`: index `i` holds `ln(2^(35 - i))`.
///
/// 35 is the largest power of two whose logarithm still leaves room for the
/// 28 fractional bits (`63 - 28`).
pub(crate) const LOG_TWO_POWER_N_REVERSED: [i64; 35] = [
    0x1_8429_946E, 0x1_7912_72EF, 0x1_6DFB_516F, 0x1_62E4_2FF0, 0x1_57CD_0E70,
    0x1_4CB5_ECF1, 0x1_419E_CB71, 0x1_3687_A9F2, 0x1_2B70_8872, 0x1_2059_66F3,
    0x1_1542_4573, 0x1_0A2B_23F4, 0xFF14_0274, 0xF3FC_E0F5, 0xE8E5_BF75,
    0xDDCE_9DF6, 0xD2B7_7C76, 0xC7A0_5AF7, 0xBC89_3977, 0xB172_17F8,
    0xA65A_F679, 0x9B43_D4F9, 0x902C_B379, 0x8515_91FA, 0x79FE_707B,
    0x6EE7_4EFB, 0x63D0_2D7B, 0x58B9_0BFC, 0x4DA1_EA7C, 0x428A_C8FD,
    0x3773_A77D, 0x2C5C_85FE, 0x2145_647E, 0x162E_42FF, 0x0B17_217F,
];

/// `ln(1 + 2^-n)` for `n = 1..=28` at index `n - 1`.
pub(crate) const LOG_ONE_PLUS_TWO_POWER_MINUS_N: [i64; 28] = [
    0x67C_C8FB, 0x391_FEF9, 0x1E2_7077, 0xF8_5186, 0x7E_0A6C, 0x3F_8151, 0x1F_E02A,
    0xF_F805, 0x7_FE01, 0x3_FF80, 0x1_FFE0, 0xFFF8, 0x7FFE, 0x4000, 0x2000, 0x1000,
    0x800, 0x400, 0x200, 0x100, 0x80, 0x40, 0x20, 0x10, 0x8, 0x4, 0x2, 0x1,
];

/// `ln(1 / (1 - 2^-n))` for `n = 1..=28` at index `n - 1`.
pub(crate) const LOG_ONE_OVER_ONE_MINUS_TWO_POWER_MINUS_N: [i64; 28] = [
    0xB17_2180, 0x49A_5884, 0x222_F1D0, 0x108_598B, 0x82_0AEC, 0x40_8159, 0x20_202B,
    0x10_0805, 0x8_0201, 0x4_0080, 0x2_0020, 0x1_0008, 0x8002, 0x4001, 0x2000, 0x1000,
    0x800, 0x400, 0x200, 0x100, 0x80, 0x40, 0x20, 0x10, 0x8, 0x4, 0x2, 0x1,
];

/// `atan(2^-(i - 1))` at index `i`, i.e. `atan(2)`, `atan(1)`, `atan(1/2)`, ...
///
/// One entry per CORDIC iteration; the trailing zeros are no-op steps.
pub(crate) const ARCTAN_TABLE: [i32; 32] = [
    297_197_971, 210_828_714, 124_459_457, 65_760_959, 33_381_290, 16_755_422, 8_385_879,
    4_193_963, 2_097_109, 1_048_571, 524_287, 262_144, 131_072, 65_536, 32_768, 16_384,
    8_192, 4_096, 2_048, 1_024, 512, 256, 128, 64, 32, 16, 8, 4, 2, 1, 0, 0,
];

/// Reciprocal of the CORDIC magnitude gain, 0.271572 in Q31.
pub(crate) const CORDIC_GAIN: i64 = 0x22C2_DD1C;
