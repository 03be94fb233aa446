//! Row-major 3x3 matrix for the linear luma/chroma transforms

/// Row-major 3x3 matrix, `m[row][col]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    /// Rows
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    /// Build from rows
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// `M v`
    #[inline]
    pub fn multiply_vec(&self, v: [f64; 3]) -> [f64; 3] {
        self.m.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_dot_vector() {
        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        assert_eq!(a.multiply_vec([1.0, 0.0, 0.0]), [1.0, 0.0, 5.0]);
        assert_eq!(a.multiply_vec([1.0, 1.0, 1.0]), [6.0, 5.0, 11.0]);
        assert_eq!(a.multiply_vec([0.0; 3]), [0.0; 3]);
    }
}
