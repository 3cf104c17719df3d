//! CSS for the landing page.
//!
//! One stylesheet serves both the static export (inlined by
//! [`crate::components::SiteDocument`]) and the browser build (inlined in a
//! `<style>` tag next to the mounted page).
//!
//! The mobile panel's open/close transition is driven only by the `open`
//! class, which follows the disclosure state. CSS transitions retarget from
//! the current value when the class flips mid-animation, so the panel always
//! settles in the state the signal holds.

/// Complete stylesheet: light theme, responsive grid, mobile panel transition.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-soft: #f6f7f9;
    --text: #0f172a;
    --text-muted: #5b6474;
    --border: #e4e7ec;
    --accent: #111827;
    --accent-contrast: #ffffff;
    --success: #047857;
    --danger: #b91c1c;
    --radius: 16px;
    --radius-sm: 10px;
    --container-max: 1120px;
    --font-sans: 'Inter', ui-sans-serif, system-ui, -apple-system, 'Segoe UI', sans-serif;
    --shadow: 0 1px 2px rgba(15, 23, 42, 0.06), 0 8px 24px rgba(15, 23, 42, 0.06);
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font-sans);
    line-height: 1.55;
    -webkit-font-smoothing: antialiased;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    width: 100%;
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 20px;
}

/* Icons */
.icon { width: 20px; height: 20px; flex-shrink: 0; }
.icon-sm { width: 16px; height: 16px; flex-shrink: 0; }
.icon.muted { color: var(--text-muted); }

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    padding: 10px 16px;
    border-radius: var(--radius-sm);
    border: 1px solid transparent;
    font: inherit;
    font-weight: 600;
    font-size: 0.95rem;
    cursor: pointer;
    transition: background 150ms ease, border-color 150ms ease, opacity 150ms ease;
}
.btn:disabled { opacity: 0.55; cursor: not-allowed; }
.btn-primary { background: var(--accent); color: var(--accent-contrast); }
.btn-primary:hover:not(:disabled) { background: #1f2937; }
.btn-outline { background: var(--bg); color: var(--text); border-color: var(--border); }
.btn-outline:hover:not(:disabled) { background: var(--bg-soft); }
.btn-ghost { background: transparent; color: var(--text); }
.btn-ghost:hover:not(:disabled) { background: var(--bg-soft); }
.btn-lg { padding: 12px 20px; font-size: 1rem; }
.btn-block { width: 100%; }

/* Cards, badges, pills */
.card {
    background: var(--bg);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    box-shadow: var(--shadow);
    height: 100%;
}
.card-content { padding: 24px; }
.card-title { margin: 0; font-size: 1.05rem; font-weight: 650; }
.card-text { margin: 8px 0 0; color: var(--text-muted); font-size: 0.95rem; }

.badge {
    display: inline-flex;
    align-items: center;
    padding: 2px 10px;
    border-radius: 999px;
    background: var(--accent);
    color: var(--accent-contrast);
    font-size: 0.75rem;
    font-weight: 600;
    white-space: nowrap;
}
.badge-soft { background: var(--bg-soft); color: var(--text); border: 1px solid var(--border); }

.pill {
    display: inline-flex;
    padding: 4px 12px;
    border-radius: 999px;
    border: 1px solid var(--border);
    background: var(--bg-soft);
    font-size: 0.8rem;
    color: var(--text-muted);
}

.separator { border: 0; border-top: 1px solid var(--border); margin: 20px 0; }

.skeleton { display: grid; gap: 8px; margin-top: 10px; }
.skeleton-line { height: 8px; border-radius: 999px; background: var(--border); }

.icon-tile {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 40px;
    height: 40px;
    border-radius: var(--radius-sm);
    background: var(--bg-soft);
    border: 1px solid var(--border);
}

/* Header and navigation */
.site-header {
    position: sticky;
    top: 0;
    z-index: 40;
    background: rgba(255, 255, 255, 0.85);
    backdrop-filter: blur(10px);
    border-bottom: 1px solid var(--border);
}
.header-inner { display: flex; align-items: center; justify-content: space-between; height: 64px; gap: 16px; }

.logo { display: inline-flex; align-items: center; gap: 10px; }
.logo-tile {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 36px;
    height: 36px;
    border-radius: var(--radius-sm);
    background: var(--accent);
    color: var(--accent-contrast);
    font-weight: 700;
}
.logo-text { display: flex; flex-direction: column; line-height: 1.15; }
.logo-name { font-weight: 700; }
.logo-byline { font-size: 0.75rem; color: var(--text-muted); }

.nav-desktop { display: flex; gap: 24px; }
.nav-link { font-size: 0.92rem; color: var(--text-muted); }
.nav-link:hover { color: var(--text); }
.header-actions { display: flex; gap: 8px; }

.menu-toggle {
    display: none;
    align-items: center;
    justify-content: center;
    width: 40px;
    height: 40px;
    border-radius: var(--radius-sm);
    border: 1px solid var(--border);
    background: var(--bg);
    color: var(--text);
    cursor: pointer;
}

.mobile-panel {
    display: none;
    overflow: hidden;
    max-height: 0;
    opacity: 0;
    visibility: hidden;
    border-top: 1px solid transparent;
    transition: max-height 240ms ease, opacity 200ms ease, visibility 0s linear 240ms;
}
.mobile-panel.open {
    max-height: 480px;
    opacity: 1;
    visibility: visible;
    border-top-color: var(--border);
    transition: max-height 240ms ease, opacity 200ms ease, visibility 0s;
}
.mobile-panel-inner { display: flex; flex-direction: column; gap: 4px; padding-top: 12px; padding-bottom: 16px; }
.mobile-link { padding: 10px 0; font-weight: 500; }
.mobile-actions { display: grid; gap: 8px; }

/* Hero */
.hero { padding: 72px 0 56px; }
.hero-grid { display: grid; grid-template-columns: 1.1fr 0.9fr; gap: 48px; align-items: center; }
.hero-pills { display: flex; flex-wrap: wrap; gap: 8px; }
.hero-title { margin: 20px 0 0; font-size: clamp(2.1rem, 4.5vw, 3.4rem); line-height: 1.08; letter-spacing: -0.02em; }
.hero-subtitle { margin: 16px 0 0; font-size: 1.1rem; color: var(--text-muted); max-width: 36rem; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 12px; margin-top: 28px; }
.hero-reassurance { display: flex; align-items: center; gap: 8px; margin: 16px 0 0; font-size: 0.88rem; color: var(--text-muted); }

.metrics { display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; margin-top: 32px; max-width: 30rem; }
.metric { padding: 12px 14px; border: 1px solid var(--border); border-radius: var(--radius-sm); background: var(--bg-soft); }
.metric-value { font-weight: 700; font-size: 1.2rem; }
.metric-label { font-size: 0.8rem; color: var(--text-muted); }

.fade-up { animation: fade-up 500ms ease both; }
@keyframes fade-up {
    from { opacity: 0; transform: translateY(8px); }
    to { opacity: 1; transform: none; }
}

.draft-head, .step-head, .pricing-head, .example-head {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    gap: 12px;
}
.draft-title { font-weight: 650; }
.draft-subtitle { font-size: 0.85rem; color: var(--text-muted); }
.draft-chapters { display: grid; gap: 18px; }
.draft-chapter-label { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.06em; color: var(--text-muted); }
.draft-chapter-title { font-weight: 600; margin-top: 2px; }
.draft-modes { margin-top: 20px; }
.draft-modes-label { font-size: 0.8rem; color: var(--text-muted); margin-bottom: 8px; }
.draft-mode-badges { display: flex; flex-wrap: wrap; gap: 6px; }
.draft-actions { display: grid; grid-template-columns: 1fr 1fr; gap: 8px; margin-top: 20px; }

/* Sections */
.section { padding: 72px 0; }
.section:nth-of-type(even) { background: var(--bg-soft); }
.section-header { text-align: center; max-width: 44rem; margin: 0 auto 40px; }
.section-eyebrow { margin-bottom: 12px; }
.section-title { margin: 0; font-size: clamp(1.6rem, 3vw, 2.3rem); letter-spacing: -0.015em; }
.section-description { margin: 12px 0 0; color: var(--text-muted); }
.section-grid { display: grid; gap: 20px; }
.section-grid.grid-3 { grid-template-columns: repeat(3, 1fr); }
.section-grid.grid-2 { grid-template-columns: repeat(2, 1fr); }

.step-ordinal { font-size: 0.8rem; font-weight: 700; color: var(--text-muted); }
.feature-head { display: flex; align-items: center; gap: 12px; }
.testimonial-quote { margin: 12px 0 0; font-size: 1rem; }
.testimonial-attribution { margin-top: 12px; font-size: 0.85rem; color: var(--text-muted); }

.pricing-card.highlighted { border: 2px solid var(--accent); }
.pricing-name { margin: 0; font-size: 1.1rem; }
.pricing-price { display: flex; align-items: baseline; gap: 6px; margin: 18px 0; }
.price { font-size: 2rem; font-weight: 750; }
.period { color: var(--text-muted); }
.benefits { list-style: none; margin: 0; padding: 0; display: grid; gap: 10px; }
.benefit { display: flex; align-items: center; gap: 8px; font-size: 0.92rem; }

.preview-box { margin-top: 16px; padding: 16px; border: 1px dashed var(--border); border-radius: var(--radius-sm); }
.preview-label { font-size: 0.8rem; color: var(--text-muted); }

.faq-question { margin: 0; font-size: 1rem; }

.use-cases {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 16px;
    margin-top: 28px;
    padding: 20px 24px;
    border: 1px solid var(--border);
    border-radius: var(--radius);
    background: var(--bg);
}
.use-cases-title { font-weight: 650; }
.use-cases-audiences { font-size: 0.9rem; color: var(--text-muted); }
.use-cases-tags { display: flex; flex-wrap: wrap; gap: 6px; }

/* Lead capture */
.lead-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 32px; align-items: center; }
.lead-perks { display: flex; flex-wrap: wrap; gap: 6px; margin-top: 16px; }
.lead-label { display: block; font-size: 0.85rem; font-weight: 600; margin-bottom: 6px; }
.lead-row { display: flex; gap: 8px; }
.input {
    flex: 1;
    min-width: 0;
    padding: 10px 12px;
    border: 1px solid var(--border);
    border-radius: var(--radius-sm);
    font: inherit;
}
.input:focus { outline: 2px solid var(--accent); outline-offset: 1px; }
.lead-notice { min-height: 1.4em; margin: 10px 0 0; font-size: 0.9rem; }
.lead-notice.info { color: var(--text-muted); }
.lead-notice.success { color: var(--success); }
.lead-notice.error { color: var(--danger); }
.lead-fine-print { margin: 6px 0 0; font-size: 0.8rem; color: var(--text-muted); }

/* Footer */
.site-footer { padding: 56px 0 32px; border-top: 1px solid var(--border); }
.footer-grid { display: grid; grid-template-columns: 1.4fr 1fr 1fr 1.2fr; gap: 32px; }
.footer-blurb { color: var(--text-muted); font-size: 0.92rem; max-width: 22rem; }
.footer-actions { display: flex; flex-wrap: wrap; gap: 8px; }
.footer-heading { font-weight: 650; margin-bottom: 12px; }
.footer-links { display: flex; flex-direction: column; gap: 8px; }
.footer-link { color: var(--text-muted); font-size: 0.92rem; }
.footer-link:hover { color: var(--text); }
.footer-contact { list-style: none; margin: 0; padding: 0; display: grid; gap: 10px; color: var(--text-muted); font-size: 0.92rem; }
.footer-contact li { display: flex; align-items: center; gap: 8px; }
.footer-copyright { margin: 0; font-size: 0.85rem; color: var(--text-muted); }

/* Responsive */
@media (max-width: 960px) {
    .hero-grid, .lead-grid { grid-template-columns: 1fr; }
    .section-grid.grid-3 { grid-template-columns: repeat(2, 1fr); }
    .footer-grid { grid-template-columns: 1fr 1fr; }
}

@media (max-width: 768px) {
    .nav-desktop, .header-actions { display: none; }
    .menu-toggle { display: inline-flex; }
    .mobile-panel { display: block; }
    .section-grid.grid-3, .section-grid.grid-2 { grid-template-columns: 1fr; }
    .metrics { grid-template-columns: repeat(3, 1fr); }
    .lead-row { flex-direction: column; }
    .footer-grid { grid-template-columns: 1fr; }
}

@media (prefers-reduced-motion: reduce) {
    html { scroll-behavior: auto; }
    .fade-up { animation: none; }
    .mobile-panel, .mobile-panel.open { transition: none; }
}
"#;

/// Content-Security-Policy for the static export. The exported page runs no
/// scripts.
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'none'; connect-src 'none'; form-action 'self';";
