use std::borrow::Cow;

use anyhow::{anyhow, Result};
use wgpu::naga::ShaderStage;

use presets::ShaderVariant;

/// Compiles the static full-screen triangle vertex shader.
pub(crate) fn compile_vertex_shader(device: &wgpu::Device) -> Result<wgpu::ShaderModule> {
    Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("fullscreen triangle vertex"),
        source: wgpu::ShaderSource::Glsl {
            shader: Cow::Borrowed(VERTEX_SHADER_GLSL),
            stage: ShaderStage::Vertex,
            defines: &[],
        },
    }))
}

/// Wraps the variant's `mainImage` body with the page prelude and compiles
/// it through naga's GLSL front-end.
///
/// Compilation runs inside a validation error scope so a broken source
/// surfaces as an `Err` the driver can degrade on, instead of an uncaptured
/// device error later.
pub(crate) fn compile_fragment_shader(
    device: &wgpu::Device,
    variant: ShaderVariant,
) -> Result<wgpu::ShaderModule> {
    let wrapped = wrap_variant_fragment(variant.fragment_body());

    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("hero fragment"),
        source: wgpu::ShaderSource::Glsl {
            shader: Cow::Owned(wrapped),
            stage: ShaderStage::Fragment,
            defines: &[],
        },
    });
    if let Some(error) = pollster::block_on(device.pop_error_scope()) {
        return Err(anyhow!(
            "fragment shader for '{variant}' failed to compile: {error}"
        ));
    }

    Ok(module)
}

/// Produces a self-contained GLSL fragment shader from a catalog body.
///
/// The body is embedded between [`HEADER`] (uniform block, poster bindings,
/// alias macros) and [`FOOTER`] (coordinate remap, `mainImage` call, panel
/// and cover compositing). Catalog sources carry no `#version` or uniform
/// declarations of their own, but stray ones from ad-hoc sources are
/// stripped so the prelude stays the single definition site.
pub(crate) fn wrap_variant_fragment(body: &str) -> String {
    let mut sanitized = String::new();
    for line in body.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("#version") {
            continue;
        }
        if trimmed.starts_with("uniform ")
            && (trimmed.contains("iResolution") || trimmed.contains("iTime"))
        {
            continue;
        }
        sanitized.push_str(line);
        sanitized.push('\n');
    }

    format!("{HEADER}\n#line 1\n{sanitized}{FOOTER}")
}

/// GLSL prologue injected ahead of every variant body.
///
/// The uniform block layout must match `PageUniforms` in `uniforms.rs`.
const HEADER: &str = r"#version 450
layout(location = 0) in vec2 v_uv;
layout(location = 0) out vec4 outColor;

layout(std140, set = 0, binding = 0) uniform PageParams {
    vec4 _resolution;
    float _time;
    float _timeDelta;
    int _frame;
    float _cover;
    vec4 _coverColor;
    vec4 _panelRect;
    vec4 _overlay;
    vec4 _posterSize;
} ubo;

#define iResolution ubo._resolution
#define iTime ubo._time
#define iTimeDelta ubo._timeDelta
#define iFrame ubo._frame

layout(set = 1, binding = 0) uniform texture2D hero_poster_texture;
layout(set = 1, binding = 1) uniform sampler hero_poster_sampler;
#define hero_poster sampler2D(hero_poster_texture, hero_poster_sampler)
";

/// GLSL epilogue: runs `mainImage`, composites the media panel on top, then
/// mixes in the loading cover by its opacity.
const FOOTER: &str = r"
float hero_rounded_rect(vec2 p, vec2 half_size, float radius) {
    vec2 q = abs(p) - half_size + radius;
    return length(max(q, 0.0)) + min(max(q.x, q.y), 0.0) - radius;
}

vec3 hero_panel(vec3 color, vec2 fragCoord) {
    vec2 size = ubo._panelRect.zw;
    if (size.x < 1.0 || size.y < 1.0) {
        return color;
    }
    vec2 local = fragCoord - ubo._panelRect.xy;
    vec2 half_size = size * 0.5;
    vec2 centered = local - half_size;
    float shape = hero_rounded_rect(centered, half_size, min(half_size.x, half_size.y) * 0.12);
    if (shape > 1.0) {
        return color;
    }
    float inside = 1.0 - smoothstep(-1.0, 1.0, shape);

    // Poster fills the panel top-down; a hidden poster leaves near-black.
    vec2 uv = vec2(local.x / size.x, 1.0 - local.y / size.y);
    vec3 media = texture(hero_poster, uv).rgb * ubo._overlay.w + vec3(0.02) * (1.0 - ubo._overlay.w);
    media = mix(media, vec3(0.0), ubo._overlay.x);

    // Round play/pause button, scaled around the panel center.
    float scale = max(ubo._overlay.z, 0.0001);
    vec2 g = centered / scale;
    float disc = length(g) - 32.0;
    float button = (1.0 - smoothstep(-1.5, 1.5, disc)) * ubo._overlay.y;

    float glyph;
    if (ubo._overlay.w > 0.5) {
        // Right-pointing play triangle.
        float tri = abs(g.y) - (10.0 - (g.x + 8.0) * 0.62);
        tri = max(tri, -(g.x + 8.0));
        tri = max(tri, g.x - 10.0);
        glyph = 1.0 - smoothstep(-1.0, 1.0, tri);
    } else {
        // Pause bars.
        float bars = min(
            hero_rounded_rect(g - vec2(-5.5, 0.0), vec2(2.5, 9.0), 1.5),
            hero_rounded_rect(g - vec2(5.5, 0.0), vec2(2.5, 9.0), 1.5));
        glyph = 1.0 - smoothstep(-1.0, 1.0, bars);
    }

    vec3 panel = mix(media, vec3(1.0), button);
    panel = mix(panel, vec3(0.09, 0.09, 0.11), glyph * button);
    return mix(color, panel, inside);
}

void main() {
    vec2 fragCoord = vec2(gl_FragCoord.x, ubo._resolution.y - gl_FragCoord.y);
    vec4 color = vec4(0.0);
    mainImage(color, fragCoord);
    color.rgb = hero_panel(color.rgb, fragCoord);
    outColor = vec4(mix(color.rgb, ubo._coverColor.rgb, ubo._cover), 1.0);
}
";

/// Minimal full-screen triangle vertex shader.
const VERTEX_SHADER_GLSL: &str = r"#version 450
layout(location = 0) out vec2 v_uv;

const vec2 positions[3] = vec2[3](
    vec2(-1.0, -1.0),
    vec2(3.0, -1.0),
    vec2(-1.0, 3.0)
);

void main() {
    uint vertex_index = uint(gl_VertexIndex);
    vec2 pos = positions[vertex_index];
    v_uv = pos * 0.5 + vec2(0.5, 0.5);
    gl_Position = vec4(pos, 0.0, 1.0);
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_main_image_and_owns_the_version_directive() {
        for variant in ShaderVariant::all() {
            let wrapped = wrap_variant_fragment(variant.fragment_body());
            assert!(wrapped.contains("void mainImage"));
            assert_eq!(wrapped.matches("#version").count(), 1, "{variant}");
            assert!(wrapped.contains("hero_panel"));
            assert!(wrapped.contains("_coverColor"));
        }
    }

    #[test]
    fn wrap_strips_stray_uniform_declarations() {
        let body = "uniform float iTime;\nuniform vec2 iResolution;\n\
                    void mainImage(out vec4 c, in vec2 f) { c = vec4(iTime); }\n";
        let wrapped = wrap_variant_fragment(body);
        assert!(!wrapped.contains("uniform float iTime"));
        assert!(!wrapped.contains("uniform vec2 iResolution"));
        assert!(wrapped.contains("mainImage"));
    }

    #[test]
    fn wrap_strips_a_leading_version_from_ad_hoc_sources() {
        let body = "#version 300 es\nvoid mainImage(out vec4 c, in vec2 f) { c = vec4(1.0); }\n";
        let wrapped = wrap_variant_fragment(body);
        assert_eq!(wrapped.matches("#version").count(), 1);
        assert!(wrapped.starts_with("#version 450"));
    }
}
