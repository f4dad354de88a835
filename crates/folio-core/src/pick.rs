use glam::Vec3;
use smallvec::SmallVec;

use crate::scene::PanelItem;

/// World-space ray with unit direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// One ray/panel intersection, `t` in world units along the ray.
#[derive(Clone, Copy, Debug)]
pub struct Hit {
    pub index: usize,
    pub t: f32,
}

/// Nearest forward intersection of a ray with a sphere, if any.
#[inline]
pub fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Test the ray against every panel's bounding sphere; nearest hit wins,
/// ties broken by smallest `t`.
pub fn nearest_panel_hit(ray: &Ray, items: &[PanelItem]) -> Option<Hit> {
    let hits: SmallVec<[Hit; 8]> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            ray_sphere(ray.origin, ray.dir, item.position, item.pick_radius())
                .map(|t| Hit { index, t })
        })
        .collect();
    hits.into_iter()
        .min_by(|a, b| a.t.total_cmp(&b.t))
}
