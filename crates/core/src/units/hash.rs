//! Index hashing for the predictor tables.
//!
//! Every table in the engine is a power of two in size and is indexed by
//! masking, so an index is always in range. Two policies are used:
//!
//! - **PC signatures** drop the two alignment bits, then XOR-fold the
//!   remaining value in `bits`-wide chunks. Adjacent instructions land in
//!   adjacent entries and high PC bits still influence the index.
//! - **Block addresses** drop the line offset and keep the low `bits` bits of
//!   the block number. Blocks `2^bits` lines apart share an entry; that
//!   aliasing is the storage trade-off of the dead-block table.
//!
//! Both functions are pure: the same input always yields the same index.

use crate::common::constants::PC_ALIGN_SHIFT;

/// XOR-folds `value` into `bits` bits.
///
/// `bits` must be in `1..=63`; a zero-width table has only index 0.
pub const fn xor_fold(value: u64, bits: u32) -> u64 {
    if bits == 0 {
        return 0;
    }
    let mask = (1u64 << bits) - 1;
    let mut folded = 0;
    let mut rest = value;
    while rest != 0 {
        folded ^= rest & mask;
        rest >>= bits;
    }
    folded
}

/// Signature table index for the instruction at `pc`.
#[inline]
pub const fn pc_signature(pc: u64, bits: u32) -> usize {
    xor_fold(pc >> PC_ALIGN_SHIFT, bits) as usize
}

/// Block number of `address` for lines of `1 << line_shift` bytes.
#[inline]
pub const fn block_number(address: u64, line_shift: u32) -> u64 {
    address >> line_shift
}

/// Dead-block table index of a block number.
#[inline]
pub const fn block_index(block: u64, bits: u32) -> usize {
    let mask = if bits == 0 { 0 } else { (1u64 << bits) - 1 };
    (block & mask) as usize
}
