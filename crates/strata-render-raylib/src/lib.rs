//! Raylib-based GPU rendering for chunk meshes: conversions, upload and draw.
// Unsafe is required for Raylib mesh upload and rlgl line state in this crate.

use raylib::prelude::*;

mod config;
mod decode;

pub use config::RenderConfig;
pub use decode::{RlVertex, decode_interleaved};

pub mod conv {
    use strata_geom::Vec3;
    use strata_mesh_cpu::Rgb;

    pub fn vec3_to_rl(v: Vec3) -> raylib::prelude::Vector3 {
        raylib::prelude::Vector3::new(v.x, v.y, v.z)
    }

    /// `[0, 1]` floats to an opaque 8-bit colour. Out-of-range channels are clamped.
    pub fn rgb_to_color(c: Rgb) -> raylib::prelude::Color {
        let ch = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        raylib::prelude::Color::new(ch(c[0]), ch(c[1]), ch(c[2]), 255)
    }
}

// Per-part vertex cap, a multiple of 6 so faces never straddle two parts.
const MAX_VERTS_PER_PART: usize = 64_998;

pub struct ChunkPart {
    pub model: raylib::core::models::Model,
    pub v_count: usize,
}

/// GPU-side copy of one chunk: filled triangles as models, outline edges as line segments.
pub struct ChunkRender {
    pub parts: Vec<ChunkPart>,
    pub outline: Vec<RlVertex>,
}

impl ChunkRender {
    /// Uploads interleaved `[px, py, pz, r, g, b]` triangle and outline streams.
    pub fn upload(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        triangles: &[f32],
        outline: &[f32],
    ) -> Option<ChunkRender> {
        let tris = decode_interleaved(triangles);
        let mut outline = decode_interleaved(outline);
        if outline.len() % 2 != 0 {
            log::warn!("outline stream has an odd vertex count {}", outline.len());
            outline.pop();
        }
        let whole = tris.len() - tris.len() % 3;
        if whole != tris.len() {
            log::warn!("triangle stream has {} stray vertices", tris.len() - whole);
        }

        let mut parts = Vec::new();
        for chunk in tris[..whole].chunks(MAX_VERTS_PER_PART) {
            parts.push(upload_part(rl, thread, chunk)?);
        }
        log::debug!(
            "uploaded chunk: {} parts, {} triangles, {} outline segments",
            parts.len(),
            whole / 3,
            outline.len() / 2
        );
        Some(ChunkRender { parts, outline })
    }

    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|p| p.v_count / 3).sum()
    }

    /// Filled faces first, then the outline at `cfg.outline_thickness`.
    pub fn draw<D: RaylibDraw3D>(&self, d3: &mut D, cfg: &RenderConfig) {
        if cfg.draw_fill {
            for part in &self.parts {
                d3.draw_model(&part.model, Vector3::zero(), 1.0, Color::WHITE);
            }
        }
        if cfg.draw_outline && !self.outline.is_empty() {
            // Line width is batch state: flush before and after so only our segments use it.
            unsafe {
                raylib::ffi::rlDrawRenderBatchActive();
                raylib::ffi::rlSetLineWidth(cfg.outline_thickness.max(0.0));
            }
            for seg in self.outline.chunks_exact(2) {
                d3.draw_line_3D(seg[0].pos, seg[1].pos, seg[0].color);
            }
            unsafe {
                raylib::ffi::rlDrawRenderBatchActive();
                raylib::ffi::rlSetLineWidth(1.0);
            }
        }
    }
}

fn upload_part(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    verts: &[RlVertex],
) -> Option<ChunkPart> {
    let v_count = verts.len();
    let mut pos = Vec::with_capacity(v_count * 3);
    let mut norm = Vec::with_capacity(v_count * 3);
    let mut col = Vec::with_capacity(v_count * 4);
    for tri in verts.chunks_exact(3) {
        let n = (tri[1].pos - tri[0].pos)
            .cross(tri[2].pos - tri[0].pos)
            .normalized();
        for v in tri {
            pos.extend_from_slice(&[v.pos.x, v.pos.y, v.pos.z]);
            norm.extend_from_slice(&[n.x, n.y, n.z]);
            col.extend_from_slice(&[v.color.r, v.color.g, v.color.b, v.color.a]);
        }
    }

    let mut raw: raylib::ffi::Mesh = unsafe { std::mem::zeroed() };
    raw.vertexCount = v_count as i32;
    raw.triangleCount = (v_count / 3) as i32;
    unsafe {
        let vbytes = (v_count * 3 * std::mem::size_of::<f32>()) as u32;
        let tbytes = (v_count * 2 * std::mem::size_of::<f32>()) as u32;
        let cbytes = (v_count * 4 * std::mem::size_of::<u8>()) as u32;
        raw.vertices = raylib::ffi::MemAlloc(vbytes) as *mut f32;
        raw.normals = raylib::ffi::MemAlloc(vbytes) as *mut f32;
        // MemAlloc zero-fills, so texcoords stay at the origin.
        raw.texcoords = raylib::ffi::MemAlloc(tbytes) as *mut f32;
        raw.colors = raylib::ffi::MemAlloc(cbytes) as *mut u8;
        std::ptr::copy_nonoverlapping(pos.as_ptr(), raw.vertices, v_count * 3);
        std::ptr::copy_nonoverlapping(norm.as_ptr(), raw.normals, v_count * 3);
        std::ptr::copy_nonoverlapping(col.as_ptr(), raw.colors, v_count * 4);
    }
    let mut mesh = unsafe { raylib::core::models::Mesh::from_raw(raw) };
    unsafe {
        mesh.upload(false);
    }
    let model = rl
        .load_model_from_mesh(thread, unsafe { mesh.make_weak() })
        .ok()?;
    Some(ChunkPart { model, v_count })
}
