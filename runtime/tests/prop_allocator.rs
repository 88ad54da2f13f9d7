//! Property-based tests for the freeing bump heap allocator.
//!
//! Invariants exercised over generated allocation sequences:
//! - returned blocks are pairwise disjoint and 8-byte aligned
//! - free-and-reallocate round-trips through the free lists
//! - live payload never exceeds the bump high-water mark
//! - pointers the allocator never handed out are rejected

use basalt_runtime::{AllocatorError, FreeingBumpAllocator, MAX_POSSIBLE_ALLOCATION};
use proptest::prelude::*;

const REGION: u32 = 1 << 20; // 1 MiB accounting region

/// Backing memory with headroom beyond the accounting region, since the
/// bumper also spends 8 header bytes per fresh block.
fn heap() -> Vec<u8> {
    vec![0u8; 2 * REGION as usize]
}

proptest! {
    /// PROPERTY: with no deallocations, every returned offset is an
    /// 8-byte-aligned range of at least the requested size, disjoint
    /// from every other live range.
    #[test]
    fn prop_allocations_disjoint_and_aligned(
        sizes in proptest::collection::vec(1u32..=4096, 1..64)
    ) {
        let mut mem = heap();
        let mut alloc = FreeingBumpAllocator::new(0, REGION);
        let mut live: Vec<(u32, u32)> = Vec::new();

        for &size in &sizes {
            let ptr = alloc.allocate(&mut mem, size).unwrap();
            prop_assert_eq!(ptr % 8, 0, "offset {} not 8-byte aligned", ptr);
            for &(other, other_size) in &live {
                let disjoint = ptr + size <= other || other + other_size <= ptr;
                prop_assert!(disjoint,
                    "range {}..+{} overlaps {}..+{}", ptr, size, other, other_size);
            }
            live.push((ptr, size));
        }
    }

    /// PROPERTY: allocate, free, allocate again with the same size
    /// returns the same offset (the free list round-trips the block).
    #[test]
    fn prop_free_list_round_trip(size in 1u32..=65536) {
        let mut mem = heap();
        let mut alloc = FreeingBumpAllocator::new(0, REGION);

        let first = alloc.allocate(&mut mem, size).unwrap();
        alloc.deallocate(&mut mem, first).unwrap();
        let second = alloc.allocate(&mut mem, size).unwrap();

        prop_assert_eq!(first, second);
    }

    /// PROPERTY: after any interleaving of allocate and deallocate, the
    /// sum of live block sizes never exceeds the bump pointer.
    #[test]
    fn prop_live_size_bounded_by_bumper(
        ops in proptest::collection::vec((1u32..=2048, any::<bool>()), 1..128)
    ) {
        let mut mem = heap();
        let mut alloc = FreeingBumpAllocator::new(0, REGION);
        let mut live = Vec::new();

        for &(size, free_one) in &ops {
            if free_one && !live.is_empty() {
                let ptr = live.swap_remove(live.len() / 2);
                alloc.deallocate(&mut mem, ptr).unwrap();
            } else {
                live.push(alloc.allocate(&mut mem, size).unwrap());
            }
            prop_assert!(alloc.total_size() <= alloc.bumper(),
                "live {} exceeds bumper {}", alloc.total_size(), alloc.bumper());
        }
    }

    /// PROPERTY: offsets never returned by allocate are rejected, and a
    /// double free is detected.
    #[test]
    fn prop_invalid_deallocations_rejected(bogus in 0u32..512, size in 1u32..=256) {
        let mut mem = heap();
        let mut alloc = FreeingBumpAllocator::new(0, REGION);

        let ptr = alloc.allocate(&mut mem, size).unwrap();
        if bogus != ptr {
            prop_assert!(alloc.deallocate(&mut mem, bogus).is_err());
        }

        alloc.deallocate(&mut mem, ptr).unwrap();
        prop_assert_eq!(
            alloc.deallocate(&mut mem, ptr),
            Err(AllocatorError::InvalidDeallocation(ptr))
        );
    }

    /// PROPERTY: requests above the maximum are rejected without
    /// touching allocator state.
    #[test]
    fn prop_oversized_requests_rejected(extra in 1u32..=1024) {
        let mut mem = heap();
        let mut alloc = FreeingBumpAllocator::new(0, REGION);
        let result = alloc.allocate(&mut mem, MAX_POSSIBLE_ALLOCATION + extra);
        prop_assert_eq!(result, Err(AllocatorError::TooLarge(MAX_POSSIBLE_ALLOCATION + extra)));
        prop_assert_eq!(alloc.total_size(), 0);
        prop_assert_eq!(alloc.bumper(), 0);
    }
}
