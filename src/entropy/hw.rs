//! Cycle-counter entropy and a mixing generator built on it.

use rand::RngCore;
use rand::rand_core::impls;
use zeroize::Zeroize;

/// Odd 64-bit multipliers; the state transition picks one per step.
const MULTIPLIERS: [u64; 8] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xff51_afd7_ed55_8ccd,
    0xc4ce_b9fe_1a85_ec53,
    0xd6e8_feb8_6659_fd93,
    0xa076_1d64_78bd_642f,
    0xe703_7ed1_a0b4_28db,
];

#[cfg(target_arch = "x86_64")]
pub fn source_name() -> &'static str {
    "rdtsc"
}

#[cfg(target_arch = "aarch64")]
pub fn source_name() -> &'static str {
    "cycle counter"
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub fn source_name() -> &'static str {
    "system (no cycle counter)"
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn counter() -> u64 {
    unsafe { core::arch::x86_64::_rdtsc() }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn counter() -> u64 {
    let cnt: u64;
    unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt) }
    cnt
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn counter() -> u64 {
    rand::random()
}

/// Generator whose state is re-keyed from the cycle counter on every draw.
pub struct HwRng {
    state: u64,
}

impl HwRng {
    pub fn new() -> Self {
        Self { state: counter() }
    }
}

impl Default for HwRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for HwRng {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let ent = counter();

        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;
        self.state = self.state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;

        // SplitMix64 finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}

impl Drop for HwRng {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
