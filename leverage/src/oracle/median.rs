multiversx_sc::imports!();

/// Returns the sorted middle, or the floored average of the two middle items if the
/// list has an even number of elements.
///
/// The list is only read. Each candidate's rank is found by counting, which keeps the
/// computation allocation free for the small sample sizes the registry allows.
pub fn calculate<M: ManagedTypeApi>(list: &ManagedVec<M, BigUint<M>>) -> Option<BigUint<M>> {
    let len = list.len();
    if len == 0 {
        return None;
    }

    let middle_index = len / 2;
    if len % 2 == 0 {
        let median1 = nth_smallest(list, middle_index - 1)?;
        let median2 = nth_smallest(list, middle_index)?;
        Some((median1 + median2) / 2u64)
    } else {
        nth_smallest(list, middle_index)
    }
}

fn nth_smallest<M: ManagedTypeApi>(
    list: &ManagedVec<M, BigUint<M>>,
    rank: usize,
) -> Option<BigUint<M>> {
    for candidate in list.iter() {
        let mut below = 0usize;
        let mut equal = 0usize;
        for other in list.iter() {
            if *other < *candidate {
                below += 1;
            } else if *other == *candidate {
                equal += 1;
            }
        }

        if below <= rank && rank < below + equal {
            return Some((*candidate).clone());
        }
    }

    None
}
