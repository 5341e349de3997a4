//! The weighted square means quantizer.
//!
//! This is k-means clustering in CIELAB over the distinct colors of an image,
//! weighted by their populations. It uses the triangle inequality to skip
//! distance computations, following Greg Hamerly and Jonathan Drake, "Accelerating
//! Lloyd's Algorithm for k-Means Clustering," 2015.

use std::collections::{BTreeMap, HashMap};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{argb_from_lab, lab_from_argb};
use crate::Float;

/// The seed for the initial cluster assignment.
const SEED: u64 = 0x42688;

#[inline]
fn distance(p: &[Float; 3], q: &[Float; 3]) -> Float {
    let [d0, d1, d2] = [p[0] - q[0], p[1] - q[1], p[2] - q[2]];
    d2.mul_add(d2, d0.mul_add(d0, d1 * d1))
}

/// A distance to another cluster.
#[derive(Clone, Copy, Debug, Default)]
struct Neighbor {
    index: usize,
    distance: Float,
}

/// Refine clusters of colors with the weighted square means algorithm.
///
/// Starting clusters seed the clusters. If there are fewer starting clusters
/// than the lesser of `max_colors` and the number of distinct pixels,
/// remaining clusters start out at the origin. If there are more starting
/// clusters, the surplus is ignored. Points initially belong to random
/// clusters, drawn from a generator with a fixed seed. Hence, the result is
/// deterministic.
///
/// A point only moves to another cluster if its distance decreases by more
/// than `min_movement`. Iteration stops after `max_iterations` or when no
/// point moves anymore.
pub(crate) fn wsmeans(
    pixels: &[u32],
    starting_clusters: &[u32],
    max_colors: usize,
    max_iterations: usize,
    min_movement: Float,
) -> BTreeMap<u32, u32> {
    // Collect distinct colors in order of first appearance.
    let mut counts_by_pixel: HashMap<u32, usize> = HashMap::new();
    let mut unique = Vec::new();
    for &pixel in pixels {
        let count = counts_by_pixel.entry(pixel).or_insert(0);
        if *count == 0 {
            unique.push(pixel);
        }
        *count += 1;
    }

    let points: Vec<[Float; 3]> = unique.iter().map(|pixel| lab_from_argb(*pixel)).collect();
    let counts: Vec<usize> = unique
        .iter()
        .map(|pixel| counts_by_pixel.get(pixel).copied().unwrap_or(0))
        .collect();

    let cluster_count = if starting_clusters.is_empty() {
        max_colors.min(points.len())
    } else {
        max_colors.min(points.len()).min(starting_clusters.len())
    };
    if cluster_count == 0 {
        return BTreeMap::new();
    }

    let mut clusters = vec![[0.0; 3]; cluster_count];
    for (cluster, argb) in clusters.iter_mut().zip(starting_clusters) {
        *cluster = lab_from_argb(*argb);
    }

    let mut rng = StdRng::seed_from_u64(SEED);
    let mut assignments: Vec<usize> = (0..points.len())
        .map(|_| rng.random_range(0..cluster_count))
        .collect();

    let mut neighbors = vec![vec![Neighbor::default(); cluster_count]; cluster_count];
    let mut populations = vec![0_usize; cluster_count];
    let mut iterations = 0;

    for iteration in 0..max_iterations {
        iterations = iteration + 1;

        // Sort every cluster's neighbors by distance.
        for i in 0..cluster_count {
            for j in 0..cluster_count {
                neighbors[i][j] = Neighbor {
                    index: j,
                    distance: distance(&clusters[i], &clusters[j]),
                };
            }
            neighbors[i].sort_by(|n1, n2| n1.distance.total_cmp(&n2.distance));
        }

        let mut points_moved = 0;
        for (point, assignment) in points.iter().zip(assignments.iter_mut()) {
            let previous = *assignment;
            let previous_distance = distance(point, &clusters[previous]);
            let mut minimum_distance = previous_distance;
            let mut candidate = None;

            for neighbor in &neighbors[previous] {
                // The triangle inequality rules out this and all further
                // clusters.
                if 4.0 * previous_distance <= neighbor.distance {
                    break;
                }

                let d = distance(point, &clusters[neighbor.index]);
                if d < minimum_distance {
                    minimum_distance = d;
                    candidate = Some(neighbor.index);
                }
            }

            if let Some(index) = candidate {
                let movement = (minimum_distance.sqrt() - previous_distance.sqrt()).abs();
                if min_movement < movement {
                    points_moved += 1;
                    *assignment = index;
                }
            }
        }

        if points_moved == 0 && iteration != 0 {
            break;
        }

        // Recompute centroids.
        let mut sums = vec![[0.0; 3]; cluster_count];
        populations.fill(0);
        for ((point, &assignment), &count) in points.iter().zip(&assignments).zip(&counts) {
            populations[assignment] += count;
            let weight = count as Float;
            let sum = &mut sums[assignment];
            for (s, p) in sum.iter_mut().zip(point) {
                *s = p.mul_add(weight, *s);
            }
        }

        for ((cluster, sum), &population) in clusters.iter_mut().zip(&sums).zip(&populations) {
            if population == 0 {
                *cluster = [0.0; 3];
            } else {
                let weight = population as Float;
                *cluster = [sum[0] / weight, sum[1] / weight, sum[2] / weight];
            }
        }
    }

    let mut result = BTreeMap::new();
    for (cluster, &population) in clusters.iter().zip(&populations) {
        if population == 0 {
            continue;
        }
        let argb = argb_from_lab(cluster);
        result.entry(argb).or_insert(population as u32);
    }

    log::debug!(
        "wsmeans quantizer: {} distinct colors, {} clusters, {} iterations, {} colors",
        points.len(),
        cluster_count,
        iterations,
        result.len()
    );
    result
}
