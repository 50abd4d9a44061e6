//! Palette and the site-wide stylesheet.

use once_cell::sync::Lazy;

/// Brand colours, exposed to CSS as custom properties on `:root`.
pub const PALETTE: &[(&str, &str)] = &[
    ("ink", "#1B1B19"),
    ("charcoal", "#2A2A28"),
    ("terre", "#7A6E5D"),
    ("bronze", "#9E8B6E"),
    ("stone", "#8C8578"),
    ("warm-grey", "#B5AEA4"),
    ("lin", "#C8BFA8"),
    ("sand", "#D4CCC0"),
    ("creme", "#EDE8DE"),
    ("paper", "#F8F6F1"),
    ("white", "#FFFFFF"),
    ("green", "#5A7A52"),
];

const FONTS: &str = "  --serif: 'Instrument Serif', Georgia, serif;\n  --sans: 'Outfit', -apple-system, sans-serif;\n";

/// Built on first use and never touched again.
pub static STYLESHEET: Lazy<String> = Lazy::new(|| {
    let mut css = String::with_capacity(RULES.len() + 512);
    css.push_str(":root {\n");
    css.push_str(FONTS);
    for (name, value) in PALETTE {
        css.push_str(&format!("  --{}: {};\n", name, value));
    }
    css.push_str("}\n");
    css.push_str(RULES);
    css
});

pub fn stylesheet() -> &'static str {
    STYLESHEET.as_str()
}

const RULES: &str = r#"
*, *::before, *::after { margin: 0; padding: 0; box-sizing: border-box; }
html { scroll-behavior: smooth; }
body, #root { font-family: var(--sans); color: var(--ink); background: var(--paper); -webkit-font-smoothing: antialiased; }

.noise::before {
  content: ''; position: absolute; inset: 0; opacity: 0.03; pointer-events: none;
  background-image: url("data:image/svg+xml,%3Csvg viewBox='0 0 256 256' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='4' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23n)'/%3E%3C/svg%3E");
}

.nav {
  position: fixed; top: 0; left: 0; right: 0; z-index: 100;
  display: flex; align-items: center; justify-content: space-between;
  padding: 20px 48px; background: rgba(248,246,241,0.85);
  backdrop-filter: blur(16px); border-bottom: 1px solid var(--sand);
}
.nav-logo { font-family: var(--serif); font-size: 18px; letter-spacing: 3px; color: var(--ink); }
.nav-sub { font-family: var(--sans); font-size: 9px; letter-spacing: 2.5px; color: var(--terre); font-weight: 500; margin-top: 2px; }
.nav-links { display: flex; gap: 32px; align-items: center; }
.nav-links a { font-size: 13px; font-weight: 400; color: var(--stone); text-decoration: none; letter-spacing: 0.3px; transition: color 0.2s; }
.nav-links a:hover { color: var(--ink); }
.nav-cta { background: var(--ink) !important; color: var(--creme) !important; padding: 10px 24px !important; font-size: 12px !important; letter-spacing: 1px !important; font-weight: 500 !important; border: none; cursor: pointer; transition: all 0.25s; }
.nav-cta:hover { background: var(--terre) !important; }

.hero { min-height: 100vh; display: flex; position: relative; }
.hero-side { display: flex; flex-direction: column; justify-content: center; padding: 140px 64px 80px; position: relative; overflow: hidden; flex: 1; transition: flex 0.6s cubic-bezier(0.4, 0, 0.2, 1); }
.hero-side .hero-content { transition: opacity 0.4s ease, transform 0.4s ease; }
.hero-left { background: var(--ink); color: var(--creme); }
.hero-right { background: var(--paper); color: var(--ink); }
@media (min-width: 901px) {
  .hero.hover-left .hero-side, .hero.hover-right .hero-side { flex: 0.6; }
  .hero.hover-left .hero-side .hero-content, .hero.hover-right .hero-side .hero-content { opacity: 0.3; transform: scale(0.96); }
  .hero.hover-left .hero-left, .hero.hover-right .hero-right { flex: 1.4; }
  .hero.hover-left .hero-left .hero-content, .hero.hover-right .hero-right .hero-content { opacity: 1; transform: scale(1); }
}
.hero-label { font-size: 10px; letter-spacing: 3px; font-weight: 500; margin-bottom: 24px; }
.hero-left .hero-label { color: var(--bronze); }
.hero-right .hero-label { color: var(--terre); opacity: 0.6; }
.hero-title { font-family: var(--serif); font-size: clamp(32px, 4vw, 48px); line-height: 1.15; margin-bottom: 20px; font-weight: 400; }
.hero-title em { font-style: italic; color: var(--bronze); }
.hero-desc { font-size: 15px; line-height: 1.7; opacity: 0.75; max-width: 400px; margin-bottom: 36px; font-weight: 300; }
.hero-btn { display: inline-block; padding: 14px 36px; font-family: var(--sans); font-size: 12px; letter-spacing: 1.5px; font-weight: 500; text-decoration: none; border: 1px solid; cursor: pointer; transition: all 0.3s; }
.btn-light { color: var(--creme); border-color: var(--bronze); background: transparent; }
.btn-light:hover { background: var(--bronze); color: var(--ink); }
.btn-dark { color: var(--ink); border-color: var(--terre); background: transparent; }
.btn-dark:hover { background: var(--ink); color: var(--creme); }
.hero-divider { position: absolute; left: 50%; top: 50%; transform: translate(-50%, -50%); z-index: 10; width: 64px; height: 64px; background: var(--terre); border-radius: 50%; display: flex; align-items: center; justify-content: center; font-family: var(--serif); font-size: 14px; color: var(--paper); box-shadow: 0 4px 24px rgba(0,0,0,0.15); transition: left 0.6s cubic-bezier(0.4, 0, 0.2, 1); pointer-events: none; }
.hero-stat { display: flex; gap: 40px; margin-top: 40px; padding-top: 24px; border-top: 1px solid rgba(255,255,255,0.1); }
.hero-right .hero-stat { border-color: var(--sand); }
.stat-num { font-family: var(--serif); font-size: 28px; display: block; }
.stat-label { font-size: 11px; opacity: 0.5; margin-top: 4px; letter-spacing: 0.5px; }

.section { padding: 120px 48px; position: relative; }
.section-dark { background: var(--ink); color: var(--creme); }
.section-creme { background: var(--creme); }
.section-label { font-size: 10px; letter-spacing: 3px; font-weight: 500; color: var(--bronze); margin-bottom: 16px; }
.section-title { font-family: var(--serif); font-size: clamp(28px, 3.5vw, 42px); line-height: 1.2; margin-bottom: 16px; font-weight: 400; }
.section-title em { font-style: italic; }
.section-subtitle { font-size: 15px; line-height: 1.7; color: var(--stone); max-width: 560px; font-weight: 300; }
.section-dark .section-subtitle { color: var(--lin); }
.section-dark .section-title { color: var(--creme); }
.section-inner { max-width: 1160px; margin: 0 auto; }

.steps-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 0; margin-top: 64px; border-top: 1px solid var(--sand); }
.step { padding: 40px 32px 40px 0; border-right: 1px solid var(--sand); position: relative; }
.step:last-child { border-right: none; }
.step-num { font-family: var(--serif); font-size: 48px; color: var(--sand); line-height: 1; margin-bottom: 20px; }
.step-title { font-family: var(--serif); font-size: 18px; margin-bottom: 12px; }
.step-desc { font-size: 13px; line-height: 1.7; color: var(--stone); font-weight: 300; }
.step-arrow { position: absolute; right: -8px; top: 52px; width: 16px; height: 16px; background: var(--paper); border-right: 1px solid var(--sand); border-bottom: 1px solid var(--sand); transform: rotate(-45deg); }

.tiers-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; margin-top: 64px; }
.tier-card { padding: 40px 32px; position: relative; border: 1px solid rgba(255,255,255,0.08); transition: transform 0.3s, border-color 0.3s; }
.tier-card:hover { transform: translateY(-4px); border-color: var(--bronze); }
.tier-featured { background: var(--terre); border-color: var(--bronze); }
.tier-badge { font-size: 9px; letter-spacing: 2.5px; font-weight: 600; margin-bottom: 20px; opacity: 0.5; }
.tier-featured .tier-badge { opacity: 0.8; color: var(--creme); }
.tier-price { font-family: var(--serif); font-size: 32px; margin-bottom: 8px; }
.tier-unit { font-size: 13px; opacity: 0.5; margin-bottom: 28px; padding-bottom: 28px; border-bottom: 1px solid rgba(255,255,255,0.08); }
.tier-featured .tier-unit { border-color: rgba(255,255,255,0.15); }
.tier-features { list-style: none; }
.tier-features li { font-size: 13px; line-height: 1.6; padding: 6px 0; font-weight: 300; opacity: 0.75; padding-left: 16px; position: relative; }
.tier-features li::before { content: '—'; position: absolute; left: 0; color: var(--bronze); }
.tier-ideal { margin-top: 24px; padding-top: 20px; border-top: 1px solid rgba(255,255,255,0.08); font-style: italic; font-family: var(--serif); font-size: 13px; opacity: 0.6; }
.tier-featured .tier-ideal { border-color: rgba(255,255,255,0.15); opacity: 0.8; }

.proof-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 40px; margin-top: 64px; }
.proof-card { background: var(--paper); padding: 40px; position: relative; border-left: 3px solid var(--bronze); }
.proof-quote { font-family: var(--serif); font-size: 18px; line-height: 1.6; color: var(--ink); margin-bottom: 24px; font-style: italic; }
.proof-open { font-family: var(--serif); font-size: 64px; color: var(--sand); line-height: 0; position: absolute; top: 48px; left: 20px; opacity: 0.4; }
.proof-author { font-size: 13px; color: var(--stone); font-weight: 400; }
.proof-role { font-size: 11px; color: var(--warm-grey); margin-top: 2px; }
.proof-stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; margin-top: 64px; padding-top: 48px; border-top: 1px solid var(--sand); }
.proof-stat-num { font-family: var(--serif); font-size: 48px; color: var(--terre); }
.proof-stat-label { font-size: 13px; color: var(--stone); margin-top: 8px; font-weight: 300; line-height: 1.5; }

.cta-section { padding: 120px 48px; background: var(--ink); color: var(--creme); position: relative; overflow: hidden; }
.cta-inner { max-width: 1160px; margin: 0 auto; display: grid; grid-template-columns: 1fr 1fr; gap: 80px; align-items: center; }
.cta-title { font-family: var(--serif); font-size: clamp(28px, 3vw, 40px); line-height: 1.2; margin-bottom: 16px; }
.cta-title em { font-style: italic; color: var(--bronze); }
.cta-desc { font-size: 15px; line-height: 1.7; color: var(--lin); font-weight: 300; margin-bottom: 32px; }
.cta-steps { display: flex; flex-direction: column; gap: 16px; }
.cta-step { display: flex; gap: 16px; align-items: flex-start; }
.cta-step-num { font-family: var(--serif); font-size: 20px; color: var(--bronze); min-width: 28px; }
.cta-step-text { font-size: 13px; color: var(--lin); font-weight: 300; line-height: 1.5; }

.cta-form { background: rgba(255,255,255,0.04); border: 1px solid rgba(255,255,255,0.08); padding: 48px; }
.form-group { margin-bottom: 20px; }
.form-label { font-size: 10px; letter-spacing: 2px; font-weight: 500; color: var(--stone); margin-bottom: 8px; display: block; }
.form-input { width: 100%; padding: 12px 0; font-family: var(--sans); font-size: 14px; color: var(--creme); background: transparent; border: none; border-bottom: 1px solid rgba(255,255,255,0.12); outline: none; transition: border-color 0.3s; }
.form-input:focus { border-color: var(--bronze); }
.form-input::placeholder { color: rgba(255,255,255,0.2); }
.form-select { width: 100%; padding: 12px 0; font-family: var(--sans); font-size: 14px; color: var(--creme); background: transparent; border: none; border-bottom: 1px solid rgba(255,255,255,0.12); outline: none; cursor: pointer; -webkit-appearance: none; appearance: none; }
.form-select option { background: var(--ink); color: var(--creme); }
.form-submit { width: 100%; padding: 16px; background: var(--bronze); color: var(--ink); font-family: var(--sans); font-size: 12px; letter-spacing: 1.5px; font-weight: 600; border: none; cursor: pointer; margin-top: 12px; transition: all 0.3s; }
.form-submit:hover { background: var(--creme); }

.footer { padding: 48px; background: var(--charcoal); display: flex; justify-content: space-between; align-items: center; color: var(--stone); font-size: 12px; border-top: 1px solid rgba(255,255,255,0.05); }
.footer-logo { font-family: var(--serif); font-size: 16px; letter-spacing: 3px; color: var(--lin); }
.footer-links { display: flex; gap: 24px; }
.footer-links a { color: var(--stone); text-decoration: none; font-size: 12px; transition: color 0.2s; }
.footer-links a:hover { color: var(--creme); }

.form-tabs { display: flex; gap: 12px; margin-bottom: 32px; }
.form-tab { flex: 1; padding: 10px; background: transparent; color: var(--stone); border: 1px solid rgba(255,255,255,0.1); font-family: var(--sans); font-size: 11px; letter-spacing: 1.5px; font-weight: 500; cursor: pointer; transition: all 0.3s; text-transform: uppercase; }
.form-tab.active { background: var(--bronze); color: var(--ink); border-color: var(--bronze); }

.faq-list { margin-top: 64px; border-top: 1px solid var(--sand); }
.faq-item { border-bottom: 1px solid var(--sand); }
.faq-question { width: 100%; display: flex; justify-content: space-between; align-items: center; gap: 24px; padding: 28px 0; background: none; border: none; cursor: pointer; text-align: left; font-family: var(--serif); font-size: 20px; color: var(--ink); }
.faq-toggle { font-family: var(--sans); font-size: 20px; color: var(--bronze); min-width: 20px; }
.faq-answer { max-height: 0; overflow: hidden; transition: max-height 0.4s ease, padding 0.4s ease; font-size: 14px; line-height: 1.7; color: var(--stone); font-weight: 300; max-width: 720px; }
.faq-item.open .faq-answer { max-height: 240px; padding-bottom: 28px; }

.legal-page { padding: 160px 48px 120px; min-height: 70vh; }
.legal-page p { font-size: 15px; line-height: 1.7; color: var(--stone); font-weight: 300; max-width: 720px; margin-bottom: 16px; }
.legal-page a { color: var(--terre); }
.footer-tagline { font-size: 10px; margin-top: 4px; letter-spacing: 1px; }
.footer-copy { font-size: 11px; }
.hero-right .hero-desc { color: var(--stone); }
.proof-stat-label { white-space: pre-line; }

@media (max-width: 900px) {
  .hero { grid-template-columns: 1fr; }
  .hero-side { padding: 100px 32px 60px; }
  .hero-divider { display: none; }
  .hero-left { min-height: 90vh; }
  .hero-right { min-height: 70vh; }
  .steps-grid { grid-template-columns: 1fr 1fr; }
  .step { border-right: none; border-bottom: 1px solid var(--sand); }
  .step-arrow { display: none; }
  .tiers-grid { grid-template-columns: 1fr; }
  .proof-grid { grid-template-columns: 1fr; }
  .proof-stats { grid-template-columns: 1fr; }
  .cta-inner { grid-template-columns: 1fr; gap: 48px; }
  .nav { padding: 16px 24px; }
  .nav-links a:not(.nav-cta) { display: none; }
  .section { padding: 80px 24px; }
  .legal-page { padding: 120px 24px 80px; }
  .footer { flex-direction: column; gap: 16px; text-align: center; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_palette_colour_is_declared() {
        let css = stylesheet();
        for (name, value) in PALETTE {
            assert!(css.contains(&format!("--{}: {};", name, value)), "missing --{}", name);
        }
    }

    #[test]
    fn stylesheet_is_built_once() {
        assert!(std::ptr::eq(stylesheet(), stylesheet()));
    }

    #[test]
    fn hero_proportions_follow_hover_classes() {
        let css = stylesheet();
        assert!(css.contains(".hero.hover-left .hero-left"));
        assert!(css.contains(".hero.hover-right .hero-right"));
        assert!(!css.contains(".hero:hover"));
    }
}
