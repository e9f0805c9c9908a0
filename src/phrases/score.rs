//! Log-likelihood ratio (G²) association scores for bigrams and trigrams.
//!
//! Each n-gram's counts are expanded into a 2^n contingency table. Cell
//! index bit `k` set means "position `k` is some other word". Expected
//! cell values assume the positions are independent, with each position's
//! marginal taken from the table itself.

const SMALL: f64 = 1e-20;

/// G² for the bigram `(w1, w2)`.
///
/// `n_ii` is the pair count, `n_ix` / `n_xi` the unigram counts of `w1` /
/// `w2`, `n_xx` the stream length.
pub fn bigram_likelihood_ratio(n_ii: u64, n_ix: u64, n_xi: u64, n_xx: u64) -> f64 {
    let n_ii = n_ii as f64;
    let n_oi = n_xi as f64 - n_ii;
    let n_io = n_ix as f64 - n_ii;
    let n_oo = n_xx as f64 - n_ii - n_oi - n_io;
    likelihood_ratio(&[n_ii, n_oi, n_io, n_oo], 2)
}

/// G² for the trigram `(w1, w2, w3)`.
///
/// `pairs` is `(count(w1 w2), count(w1 _ w3), count(w2 w3))`, `singles` is
/// `(count(w1), count(w2), count(w3))`, `n_xxx` the stream length.
pub fn trigram_likelihood_ratio(
    n_iii: u64,
    pairs: (u64, u64, u64),
    singles: (u64, u64, u64),
    n_xxx: u64,
) -> f64 {
    let (n_iix, n_ixi, n_xii) = (pairs.0 as f64, pairs.1 as f64, pairs.2 as f64);
    let (n_ixx, n_xix, n_xxi) = (singles.0 as f64, singles.1 as f64, singles.2 as f64);
    let n_iii = n_iii as f64;

    let n_oii = n_xii - n_iii;
    let n_ioi = n_ixi - n_iii;
    let n_iio = n_iix - n_iii;
    let n_ooi = n_xxi - n_iii - n_oii - n_ioi;
    let n_oio = n_xix - n_iii - n_oii - n_iio;
    let n_ioo = n_ixx - n_iii - n_ioi - n_iio;
    let n_ooo = n_xxx as f64 - n_iii - n_oii - n_ioi - n_iio - n_ooi - n_oio - n_ioo;

    likelihood_ratio(
        &[n_iii, n_oii, n_ioi, n_ooi, n_iio, n_oio, n_ioo, n_ooo],
        3,
    )
}

/// `2 * Σ obs * ln(obs / exp)` over a 2^`order` contingency table.
///
/// Overlapping windows of a self-repeating n-gram (`bla bla bla`) can make
/// the derived cells negative; those are clamped to zero.
fn likelihood_ratio(cont: &[f64], order: u32) -> f64 {
    let cont: Vec<f64> = cont.iter().map(|&c| c.max(0.0)).collect();
    let expected = expected_values(&cont, order);
    2.0 * cont
        .iter()
        .zip(expected.iter())
        .map(|(&obs, &exp)| obs * (obs / (exp + SMALL) + SMALL).ln())
        .sum::<f64>()
}

fn expected_values(cont: &[f64], order: u32) -> Vec<f64> {
    let n_all: f64 = cont.iter().sum();
    let denominator = n_all.powi(order as i32 - 1);
    (0..cont.len())
        .map(|i| {
            let product: f64 = (0..order)
                .map(|k| {
                    let bit = 1usize << k;
                    (0..cont.len())
                        .filter(|x| x & bit == i & bit)
                        .map(|x| cont[x])
                        .sum::<f64>()
                })
                .product();
            product / denominator
        })
        .collect()
}
