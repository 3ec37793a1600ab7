//! Vertex data drawn by the tutorials.

use rand::Rng;

/// One triangle in normalized device coordinates.
#[rustfmt::skip]
pub const TRIANGLE: [f32; 9] = [
    -1.0, -1.0, 0.0,
     1.0, -1.0, 0.0,
     0.0,  1.0, 0.0,
];

/// Unit cube around the origin, 12 triangles.
#[rustfmt::skip]
pub const CUBE: [f32; 108] = [
    -1.0, -1.0, -1.0,   -1.0, -1.0,  1.0,   -1.0,  1.0,  1.0,
     1.0,  1.0, -1.0,   -1.0, -1.0, -1.0,   -1.0,  1.0, -1.0,
     1.0, -1.0,  1.0,   -1.0, -1.0, -1.0,    1.0, -1.0, -1.0,
     1.0,  1.0, -1.0,    1.0, -1.0, -1.0,   -1.0, -1.0, -1.0,
    -1.0, -1.0, -1.0,   -1.0,  1.0,  1.0,   -1.0,  1.0, -1.0,
     1.0, -1.0,  1.0,   -1.0, -1.0,  1.0,   -1.0, -1.0, -1.0,
    -1.0,  1.0,  1.0,   -1.0, -1.0,  1.0,    1.0, -1.0,  1.0,
     1.0,  1.0,  1.0,    1.0, -1.0, -1.0,    1.0,  1.0, -1.0,
     1.0, -1.0, -1.0,    1.0,  1.0,  1.0,    1.0, -1.0,  1.0,
     1.0,  1.0,  1.0,    1.0,  1.0, -1.0,   -1.0,  1.0, -1.0,
     1.0,  1.0,  1.0,   -1.0,  1.0, -1.0,   -1.0,  1.0,  1.0,
     1.0,  1.0,  1.0,   -1.0,  1.0,  1.0,    1.0, -1.0,  1.0,
];

/// Number of vertices in a tightly packed `xyz` buffer.
pub fn vertex_count(positions: &[f32]) -> usize {
    positions.len() / 3
}

/// A random RGB color per vertex, components in `[0, 1)`.
pub fn random_colors<R: Rng>(vertices: usize, rng: &mut R) -> Vec<f32> {
    (0..vertices * 3).map(|_| rng.random::<f32>()).collect()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn cube_is_twelve_triangles_on_the_unit_box() {
        assert_eq!(vertex_count(&CUBE), 36);
        assert!(CUBE.iter().all(|c| c.abs() == 1.0));
    }

    #[test]
    fn every_cube_corner_is_used() {
        let mut corners: Vec<[i8; 3]> = CUBE
            .chunks_exact(3)
            .map(|v| [v[0] as i8, v[1] as i8, v[2] as i8])
            .collect();
        corners.sort();
        corners.dedup();
        assert_eq!(corners.len(), 8);
    }

    #[test]
    fn triangle_has_three_vertices() {
        assert_eq!(vertex_count(&TRIANGLE), 3);
    }

    #[test]
    fn colors_match_vertex_count_and_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let colors = random_colors(vertex_count(&CUBE), &mut rng);
        assert_eq!(colors.len(), CUBE.len());
        assert!(colors.iter().all(|c| (0.0..1.0).contains(c)));
    }

    #[test]
    fn colors_are_reproducible_with_a_seed() {
        let a = random_colors(4, &mut StdRng::seed_from_u64(1));
        let b = random_colors(4, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
