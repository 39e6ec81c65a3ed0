//! GLSL fragment bodies for the built-in variants.
//!
//! Each constant is a complete `mainImage` implementation. Tuning constants
//! (drift speeds, band positions, palette values) are part of the visual
//! identity and change only with design sign-off.

/// Four drifting color centers blended by soft radial falloff.
pub(crate) const LIQUID_MESH: &str = r"
void mainImage(out vec4 fragColor, in vec2 fragCoord) {
    vec2 uv = fragCoord / iResolution.xy;
    float aspect = iResolution.x / iResolution.y;
    uv.x *= aspect;
    float t = iTime * 0.12;

    vec2 p1 = vec2(0.3 * aspect + sin(t * 0.7) * 0.3, 0.3 + cos(t * 0.5) * 0.25);
    vec2 p2 = vec2(0.7 * aspect + cos(t * 0.6) * 0.25, 0.7 + sin(t * 0.8) * 0.2);
    vec2 p3 = vec2(0.5 * aspect + sin(t * 0.9 + 2.0) * 0.3, 0.5 + cos(t * 0.4 + 1.0) * 0.3);
    vec2 p4 = vec2(0.6 * aspect + cos(t * 0.5 + 3.0) * 0.2, 0.2 + sin(t * 0.7 + 2.0) * 0.25);

    float d1 = exp(-3.5 * length(uv - p1));
    float d2 = exp(-3.0 * length(uv - p2));
    float d3 = exp(-3.5 * length(uv - p3));
    float d4 = exp(-4.0 * length(uv - p4));

    // teal, emerald, cyan, blue
    vec3 c1 = vec3(0.10, 0.70, 0.65);
    vec3 c2 = vec3(0.05, 0.50, 0.45);
    vec3 c3 = vec3(0.15, 0.55, 0.80);
    vec3 c4 = vec3(0.08, 0.40, 0.70);
    vec3 bg = vec3(0.06, 0.08, 0.14);

    float total = d1 + d2 + d3 + d4 + 0.001;
    vec3 color = (c1 * d1 + c2 * d2 + c3 * d3 + c4 * d4) / total;
    float blend = smoothstep(0.0, 0.6, d1 + d2 + d3 + d4);
    color = mix(bg, color, blend);

    float glow = exp(-2.0 * length(uv - vec2(0.4 * aspect, 0.5)));
    color += vec3(0.03, 0.08, 0.08) * glow;

    fragColor = vec4(color, 1.0);
}
";

/// Stacked fbm noise bands, faded toward the top and bottom edges.
pub(crate) const AURORA: &str = r"
vec2 hash(vec2 p) {
    p = vec2(dot(p, vec2(127.1, 311.7)), dot(p, vec2(269.5, 183.3)));
    return -1.0 + 2.0 * fract(sin(p) * 43758.5453123);
}

float simplex(vec2 p) {
    const float K1 = 0.366025404;
    const float K2 = 0.211324865;
    vec2 i = floor(p + (p.x + p.y) * K1);
    vec2 a = p - i + (i.x + i.y) * K2;
    float m = step(a.y, a.x);
    vec2 o = vec2(m, 1.0 - m);
    vec2 b = a - o + K2;
    vec2 c = a - 1.0 + 2.0 * K2;
    vec3 h = max(0.5 - vec3(dot(a, a), dot(b, b), dot(c, c)), 0.0);
    vec3 n = h * h * h * h * vec3(dot(a, hash(i)), dot(b, hash(i + o)), dot(c, hash(i + 1.0)));
    return dot(n, vec3(70.0));
}

float fbm(vec2 p) {
    float f = 0.0;
    f += 0.5 * simplex(p); p *= 2.01;
    f += 0.25 * simplex(p); p *= 2.02;
    f += 0.125 * simplex(p); p *= 2.03;
    f += 0.0625 * simplex(p);
    return f;
}

void mainImage(out vec4 fragColor, in vec2 fragCoord) {
    vec2 uv = fragCoord / iResolution.xy;
    float t = iTime * 0.08;

    float n1 = fbm(vec2(uv.x * 2.0 + t, uv.y * 3.0 + t * 0.3));
    float n2 = fbm(vec2(uv.x * 1.5 - t * 0.5, uv.y * 4.0 + t * 0.2));
    float n3 = fbm(vec2(uv.x * 3.0 + t * 0.7, uv.y * 2.5 - t * 0.4));

    float wave1 = smoothstep(0.0, 0.15, 0.1 - abs(uv.y - 0.4 - n1 * 0.15));
    float wave2 = smoothstep(0.0, 0.2, 0.12 - abs(uv.y - 0.55 - n2 * 0.12));
    float wave3 = smoothstep(0.0, 0.1, 0.08 - abs(uv.y - 0.65 - n3 * 0.1));

    vec3 bg = vec3(0.04, 0.05, 0.12);
    vec3 color = bg;
    color += vec3(0.08, 0.60, 0.55) * wave1 * 1.2;
    color += vec3(0.10, 0.45, 0.75) * wave2 * 1.0;
    color += vec3(0.05, 0.70, 0.60) * wave3 * 0.8;

    float glow = fbm(uv * 2.0 + t * 0.3) * 0.08;
    color += vec3(0.05, 0.15, 0.20) * glow;

    float fade = smoothstep(0.0, 0.3, uv.y) * smoothstep(1.0, 0.7, uv.y);
    color = mix(bg, color, fade);

    fragColor = vec4(color, 1.0);
}
";

/// Layered sine interference warped through shades of #0BB980.
pub(crate) const PLASMA: &str = r"
void mainImage(out vec4 fragColor, in vec2 fragCoord) {
    vec2 uv = fragCoord / iResolution.xy;
    float aspect = iResolution.x / iResolution.y;
    uv.x *= aspect;
    float t = iTime * 0.25;

    float v1 = sin(uv.x * 4.0 + t * 1.2);
    float v2 = sin(uv.y * 3.5 - t * 0.9);
    float v3 = sin((uv.x + uv.y) * 2.5 + t * 0.8);
    float v4 = sin(length(uv - vec2(0.5 * aspect, 0.5)) * 5.0 - t * 1.1);

    float v = (v1 + v2 + v3 + v4) * 0.25;

    float warp = sin(v * 3.14159 + t * 0.3) * 0.5 + 0.5;
    float warp2 = cos(v * 2.5 - t * 0.2) * 0.5 + 0.5;

    vec3 base = vec3(0.043, 0.725, 0.502);
    vec3 c1 = base * 1.3;
    vec3 c2 = base * 0.85;
    vec3 c3 = base * 0.5;
    vec3 c4 = base * 1.1 + vec3(0.0, 0.08, 0.05);

    vec3 color = mix(c1, c2, warp);
    color = mix(color, c3, warp2 * 0.4);
    color = mix(color, c4, sin(v * 2.0 + t) * 0.3 + 0.3);

    color *= 0.7;
    vec3 bg = vec3(0.03, 0.06, 0.04);
    float intensity = smoothstep(-1.0, 1.0, v) * 0.75 + 0.25;
    color = mix(bg, color, intensity);

    vec2 center = fragCoord / iResolution.xy - 0.5;
    color *= 1.0 - dot(center, center) * 0.6;

    fragColor = vec4(color, 1.0);
}
";
