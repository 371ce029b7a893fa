//! Weighted quota allocation
//!
//! Splits a point count across regions in proportion to their weights.

/// Allocate `total` points across `weights`
///
/// Each quota is `round(total * w / sum(w))` computed independently. A
/// shortfall is handed out one point at a time to the heaviest regions
/// (table order breaks ties). An overshoot is taken back one point at a time
/// starting from the lightest regions (later table entries first among equal
/// weights), skipping regions already at zero. The result always sums to
/// `total` unless every weight is zero, in which case all quotas are zero.
pub fn allocate(total: usize, weights: &[u32]) -> Vec<usize> {
    let weight_sum: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if weight_sum == 0 {
        return vec![0; weights.len()];
    }

    let mut quotas: Vec<usize> = weights
        .iter()
        .map(|&w| (total as f64 * f64::from(w) / weight_sum as f64).round() as usize)
        .collect();

    // sort_by is stable, so equal weights keep table order
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| weights[b].cmp(&weights[a]));

    let assigned: usize = quotas.iter().sum();

    if assigned < total {
        for &i in order.iter().cycle().take(total - assigned) {
            quotas[i] += 1;
        }
    } else if assigned > total {
        let mut excess = assigned - total;
        while excess > 0 {
            for &i in order.iter().rev() {
                if excess == 0 {
                    break;
                }
                if quotas[i] > 0 {
                    quotas[i] -= 1;
                    excess -= 1;
                }
            }
        }
    }

    quotas
}
