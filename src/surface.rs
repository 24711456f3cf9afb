use crate::error::{Result, StopError};

use geom::prelude::*;
use geom::{FromVertices, Triangle, TupleTriangle, Vec3};

/// Squared length below which a normal counts as degenerate.
const MIN_NORMAL_LENGTH_SQR: f32 = 1e-12;

/// Closed triangulated boundary of a convex microdomain.
///
/// Invariants, checked on construction:
/// - at least one vertex and one triangle,
/// - every triangle index refers to an existing vertex,
/// - one finite, non-zero normal per triangle, stored at unit length.
///
/// Convexity and outward orientation of the normals are the caller's
/// responsibility when normals are passed in. Use
/// [`from_convex_mesh`](#method.from_convex_mesh) to have them derived.
#[derive(Debug, Clone)]
pub struct ConvexDomainSurface {
    vertices: Vec<Vec3>,
    triangles: Vec<[usize; 3]>,
    normals: Vec<Vec3>,
}

impl ConvexDomainSurface {
    pub fn new(vertices: Vec<Vec3>, triangles: Vec<[usize; 3]>, normals: Vec<Vec3>) -> Result<Self> {
        validate_mesh(&vertices, &triangles)?;

        if normals.len() != triangles.len() {
            return Err(StopError::NormalCountMismatch {
                triangles: triangles.len(),
                normals: normals.len(),
            });
        }

        let normals = normals
            .into_iter()
            .enumerate()
            .map(|(triangle, n)| unit_normal(n).ok_or(StopError::DegenerateNormal { triangle }))
            .collect::<Result<Vec<_>>>()?;

        Ok(ConvexDomainSurface {
            vertices,
            triangles,
            normals,
        })
    }

    /// Builds a surface from a convex mesh without normals.
    ///
    /// The normal of each triangle is the normalized cross product of two of its
    /// edges, flipped if necessary so that it points away from the vertex centroid.
    /// This only yields outward normals if the mesh is convex.
    pub fn from_convex_mesh(vertices: Vec<Vec3>, triangles: Vec<[usize; 3]>) -> Result<Self> {
        validate_mesh(&vertices, &triangles)?;

        let centroid = vertex_centroid(&vertices);
        let normals = triangles
            .iter()
            .enumerate()
            .map(|(triangle, &[a, b, c])| -> Result<Vec3> {
                let (a, b, c) = (vertices[a], vertices[b], vertices[c]);
                let n = unit_normal((b - a).cross(c - a))
                    .ok_or(StopError::DegenerateNormal { triangle })?;
                let face_center = (a + b + c) / 3.0;
                Ok(if n.dot(face_center - centroid) < 0.0 { -n } else { n })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ConvexDomainSurface {
            vertices,
            triangles,
            normals,
        })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Unit outward normals, one per triangle.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// First vertex of each triangle, a point on the plane of that face.
    pub fn anchors(&self) -> Vec<Vec3> {
        self.triangles.iter().map(|t| self.vertices[t[0]]).collect()
    }

    pub fn triangle(&self, idx: usize) -> TupleTriangle<Vec3> {
        let [a, b, c] = self.triangles[idx];
        TupleTriangle::new(self.vertices[a], self.vertices[b], self.vertices[c])
    }

    pub fn triangle_iter<'a>(&'a self) -> impl Iterator<Item = TupleTriangle<Vec3>> + 'a {
        (0..self.triangles.len()).map(move |idx| self.triangle(idx))
    }

    /// Mean of all vertex positions, strictly inside for a non-flat convex mesh.
    pub fn centroid(&self) -> Vec3 {
        vertex_centroid(&self.vertices)
    }

    /// Total surface area.
    pub fn area(&self) -> f32 {
        self.triangle_iter().map(|t| t.area()).sum()
    }
}

fn validate_mesh(vertices: &[Vec3], triangles: &[[usize; 3]]) -> Result<()> {
    if vertices.is_empty() || triangles.is_empty() {
        return Err(StopError::EmptyMesh);
    }

    if let Some(vertex) = vertices
        .iter()
        .position(|v| !(v.x.is_finite() && v.y.is_finite() && v.z.is_finite()))
    {
        return Err(StopError::NonFiniteVertex { vertex });
    }

    let vertex_count = vertices.len();
    for (triangle, indices) in triangles.iter().enumerate() {
        if let Some(&index) = indices.iter().find(|&&i| i >= vertex_count) {
            return Err(StopError::VertexIndexOutOfRange {
                triangle,
                index,
                vertex_count,
            });
        }
    }

    Ok(())
}

fn unit_normal(n: Vec3) -> Option<Vec3> {
    let finite = n.x.is_finite() && n.y.is_finite() && n.z.is_finite();
    if finite && n.magnitude2() > MIN_NORMAL_LENGTH_SQR {
        Some(n.normalize())
    } else {
        None
    }
}

fn vertex_centroid(vertices: &[Vec3]) -> Vec3 {
    let sum = vertices.iter().fold(Vec3::zero(), |acc, &v| acc + v);
    sum / (vertices.len() as f32)
}
