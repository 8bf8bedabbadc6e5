//! Vertex data for the demo scene

/// A single 2D vertex in clip space
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    /// Buffer layout matching the `@location(0) vec2<f32>` shader input
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x2],
    };
}

/// The whole scene: two disjoint triangles, counter-clockwise winding
pub const TWO_TRIANGLES: [Vertex; 6] = [
    Vertex { position: [-0.5, -0.5] },
    Vertex { position: [0.5, -0.5] },
    Vertex { position: [0.0, 0.5] },
    Vertex { position: [-0.55, -0.5] },
    Vertex { position: [-0.05, 0.5] },
    Vertex { position: [-0.55, 0.5] },
];

pub const VERTEX_COUNT: u32 = TWO_TRIANGLES.len() as u32;

/// Create the scene's vertex buffer and upload the six vertices
pub fn create_vertex_buffer(device: &wgpu::Device, queue: &wgpu::Queue) -> wgpu::Buffer {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Triangle Vertex Buffer"),
        size: (std::mem::size_of::<Vertex>() * TWO_TRIANGLES.len()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    queue.write_buffer(&buffer, 0, bytemuck::cast_slice(&TWO_TRIANGLES));
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_area(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> f32 {
        (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
    }

    #[test]
    fn scene_is_two_triangles() {
        assert_eq!(TWO_TRIANGLES.len(), 6);
        assert_eq!(VERTEX_COUNT, 6);
    }

    #[test]
    fn triangles_wind_counter_clockwise() {
        for tri in TWO_TRIANGLES.chunks(3) {
            let area = signed_area(tri[0].position, tri[1].position, tri[2].position);
            assert!(area > 0.0, "clockwise triangle: {tri:?}");
        }
    }

    #[test]
    fn positions_stay_in_clip_space() {
        for vertex in TWO_TRIANGLES {
            assert!(vertex.position[0].abs() <= 1.0);
            assert!(vertex.position[1].abs() <= 1.0);
        }
    }

    #[test]
    fn layout_matches_shader_contract() {
        assert_eq!(Vertex::LAYOUT.array_stride, 8);
        assert_eq!(Vertex::LAYOUT.step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(Vertex::LAYOUT.attributes.len(), 1);
        assert_eq!(Vertex::LAYOUT.attributes[0].shader_location, 0);
        assert_eq!(Vertex::LAYOUT.attributes[0].offset, 0);
        assert_eq!(
            Vertex::LAYOUT.attributes[0].format,
            wgpu::VertexFormat::Float32x2
        );
        // One upload of exactly 6 * 8 bytes
        assert_eq!(bytemuck::cast_slice::<Vertex, u8>(&TWO_TRIANGLES).len(), 48);
    }
}
