//! Cities and the precomputed pairwise distance matrix.
//!
//! The matrix is built once per dataset from an injected distance oracle
//! and shared read-only by both solvers.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A city located by latitude and longitude in degrees.
///
/// A city's identifier is its index in the slice it is loaded into.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub lat: f64,
    pub lon: f64,
}

impl City {
    /// Creates a city. Coordinates are checked when a matrix is built.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    fn has_valid_coordinates(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl From<(f64, f64)> for City {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

/// Great-circle distance between two cities in kilometres.
pub fn haversine_km(a: &City, b: &City) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();
    let s1 = (dlat / 2.0).sin();
    let s2 = (dlon / 2.0).sin();
    let h = s1 * s1 + lat1.cos() * lat2.cos() * s2 * s2;
    // Rounding can push h a hair above 1 for antipodal points.
    2.0 * EARTH_RADIUS_KM * h.min(1.0).sqrt().asin()
}

/// Symmetric N×N distance table with a zero diagonal, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    distances: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix from cities and a distance oracle.
    ///
    /// The oracle is called once per unordered pair `i < j`; the lower
    /// triangle is mirrored from the upper one.
    ///
    /// Cities are geographic: every city must carry a finite latitude in
    /// `[-90, 90]` and longitude in `[-180, 180]`, whatever oracle is
    /// injected. The check runs before the oracle is first called. For
    /// planar or other non-geographic metrics, compute the distances
    /// yourself and use [`from_rows`](Self::from_rows).
    ///
    /// # Errors
    ///
    /// - [`TspError::InsufficientCities`] for fewer than 2 cities
    /// - [`TspError::InvalidCoordinate`] for non-finite or out-of-range
    ///   latitude/longitude
    /// - [`TspError::InvalidDistance`] if the oracle returns a negative or
    ///   non-finite value
    ///
    /// [`TspError::InsufficientCities`]: crate::TspError::InsufficientCities
    /// [`TspError::InvalidCoordinate`]: crate::TspError::InvalidCoordinate
    /// [`TspError::InvalidDistance`]: crate::TspError::InvalidDistance
    pub fn from_cities<F>(cities: &[City], distance: F) -> crate::Result<Self>
    where
        F: Fn(&City, &City) -> f64,
    {
        let n = cities.len();
        if n < 2 {
            return Err(crate::TspError::InsufficientCities { found: n });
        }
        if let Some((index, city)) = cities
            .iter()
            .enumerate()
            .find(|(_, c)| !c.has_valid_coordinates())
        {
            return Err(crate::TspError::InvalidCoordinate {
                index,
                lat: city.lat,
                lon: city.lon,
            });
        }

        let mut distances = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance(&cities[i], &cities[j]);
                if !d.is_finite() || d < 0.0 {
                    return Err(crate::TspError::InvalidDistance {
                        from: i,
                        to: j,
                        value: d,
                    });
                }
                distances[i * n + j] = d;
                distances[j * n + i] = d;
            }
        }

        Ok(Self { n, distances })
    }

    /// Builds the matrix using [`haversine_km`].
    pub fn haversine(cities: &[City]) -> crate::Result<Self> {
        Self::from_cities(cities, haversine_km)
    }

    /// Wraps a caller-supplied full matrix after checking its invariants.
    ///
    /// The matrix must be square with at least 2 rows, symmetric, have a
    /// zero diagonal, and contain only finite non-negative values.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> crate::Result<Self> {
        let n = rows.len();
        if n < 2 {
            return Err(crate::TspError::InsufficientCities { found: n });
        }
        if let Some(i) = rows.iter().position(|r| r.len() != n) {
            return Err(crate::TspError::InvalidMatrix(format!(
                "row {i} has {} entries, expected {n}",
                rows[i].len()
            )));
        }
        for i in 0..n {
            if rows[i][i] != 0.0 {
                return Err(crate::TspError::InvalidMatrix(format!(
                    "diagonal entry ({i}, {i}) is {}",
                    rows[i][i]
                )));
            }
            for j in (i + 1)..n {
                let d = rows[i][j];
                if !d.is_finite() || d < 0.0 {
                    return Err(crate::TspError::InvalidDistance {
                        from: i,
                        to: j,
                        value: d,
                    });
                }
                if rows[j][i] != d {
                    return Err(crate::TspError::InvalidMatrix(format!(
                        "entries ({i}, {j}) and ({j}, {i}) differ"
                    )));
                }
            }
        }

        let distances = rows.into_iter().flatten().collect();
        Ok(Self { n, distances })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix holds no cities; never true once built.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between cities `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.distances[i * self.n + j]
    }

    /// Distances from city `i` to every city.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.distances[i * self.n..(i + 1) * self.n]
    }
}
