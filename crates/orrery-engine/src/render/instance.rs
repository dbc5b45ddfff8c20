use bytemuck::{Pod, Zeroable};

/// Per-body render data handed to camera/render/HUD collaborators as one
/// flat float array: 8 floats = 32 bytes stride. The f64 simulation state
/// narrows to f32 here and only here.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BodyInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Visual radius in world units.
    pub radius: f32,
    /// Body kind (0 sun, 1 planet, 2 moon, 3 meteorite).
    pub kind: f32,
    /// Collision glow in [0, 1].
    pub glow: f32,
    /// Current orbit radius around the parent center.
    pub orbit_radius: f32,
    /// Orbit angle in [0, 2π).
    pub orbit_angle: f32,
    /// Weight as a fraction of the sun's weight, for HUD scaling.
    pub weight_scale: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Flat instance buffer rebuilt once per frame.
pub struct InstanceBuffer {
    pub instances: Vec<BodyInstance>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(512),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: BodyInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for zero-copy consumers.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), 32);
        assert_eq!(BodyInstance::FLOATS, 8);
        assert_eq!(BodyInstance::STRIDE_BYTES, 32);
    }

    #[test]
    fn instance_buffer_push_and_count() {
        let mut buf = InstanceBuffer::new();
        buf.push(BodyInstance::default());
        buf.push(BodyInstance::default());
        assert_eq!(buf.instance_count(), 2);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
    }
}
