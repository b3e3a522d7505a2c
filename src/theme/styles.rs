//! Global CSS styles for Storyshot.
//!
//! Soft paper-and-slate look lifted from the original card composer.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --paper: #f8fafc;
  --paper-dim: #f1f5f9;
  --ink: #0f172a;
  --ink-soft: #334155;
  --ink-muted: #64748b;
  --line: #e2e8f0;
  --accent: #2563eb;
  --accent-soft: rgba(37, 99, 235, 0.12);
  --danger: #b91c1c;
  --card-radius: 32px;
}

* { box-sizing: border-box; }

html, body {
  margin: 0;
  padding: 0;
  background: var(--paper);
  color: var(--ink);
  font-family: "Pretendard", "Apple SD Gothic Neo", "Noto Sans KR", system-ui, sans-serif;
  height: 100%;
}

#main { height: 100%; }

button {
  font: inherit;
  cursor: pointer;
  border: none;
  background: none;
}

/* === App chrome === */
.app-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 14px 24px;
  border-bottom: 1px solid var(--line);
  background: rgba(248, 250, 252, 0.9);
}

.app-header__title {
  font-size: 18px;
  font-weight: 700;
  letter-spacing: -0.01em;
}

.app-header__tagline {
  margin-left: 10px;
  font-size: 12px;
  color: var(--ink-muted);
}

.app-header__nav {
  display: flex;
  align-items: center;
  gap: 12px;
}

.nav-link {
  font-size: 13px;
  font-weight: 600;
  color: var(--accent);
  text-decoration: none;
  padding: 6px 10px;
  border-radius: 8px;
}

.nav-link:hover { background: var(--accent-soft); }

.locale-switcher {
  font-size: 12px;
  font-weight: 600;
  color: var(--ink-soft);
  border: 1px solid var(--line);
  border-radius: 999px;
  padding: 4px 12px;
  background: white;
}

/* === Composer layout === */
.composer {
  display: flex;
  gap: 32px;
  padding: 24px;
  max-width: 1100px;
  margin: 0 auto;
  align-items: flex-start;
}

.composer__form {
  flex: 1 1 420px;
  display: flex;
  flex-direction: column;
  gap: 16px;
  min-width: 0;
}

.composer__preview {
  flex: 0 1 420px;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 14px;
  position: sticky;
  top: 24px;
}

.composer__actions {
  display: flex;
  gap: 10px;
  width: 100%;
  justify-content: center;
}

.section-label {
  font-size: 12px;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--ink-muted);
}

.chip-row {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}

/* === Form primitives === */
.field { display: flex; flex-direction: column; gap: 6px; }

.field__label {
  font-size: 13px;
  font-weight: 600;
  color: var(--ink-soft);
}

.field__input, .field__textarea {
  font: inherit;
  padding: 10px 12px;
  border: 1px solid var(--line);
  border-radius: 10px;
  background: white;
  color: var(--ink);
}

.field__input:focus, .field__textarea:focus {
  outline: 2px solid var(--accent-soft);
  border-color: var(--accent);
}

.field__textarea { resize: vertical; min-height: 64px; }

.toggle-chip {
  padding: 7px 14px;
  border-radius: 999px;
  border: 1px solid var(--line);
  background: white;
  font-size: 13px;
  color: var(--ink-soft);
}

.toggle-chip--active {
  border-color: var(--accent);
  background: var(--accent-soft);
  color: var(--accent);
  font-weight: 600;
}

.emoji-grid {
  display: flex;
  flex-wrap: wrap;
  gap: 4px;
}

.emoji-grid__item {
  font-size: 18px;
  padding: 4px 6px;
  border-radius: 8px;
  border: 1px solid transparent;
}

.emoji-grid__item--active {
  border-color: var(--accent);
  background: var(--accent-soft);
}

.overlay-slider {
  width: 100%;
}

.primary-btn {
  padding: 10px 18px;
  border-radius: 12px;
  background: var(--ink);
  color: white;
  font-weight: 600;
  font-size: 14px;
}

.primary-btn:disabled { opacity: 0.5; cursor: default; }

.secondary-btn {
  padding: 10px 18px;
  border-radius: 12px;
  border: 1px solid var(--line);
  background: white;
  color: var(--ink-soft);
  font-weight: 600;
  font-size: 14px;
}

.status-line { font-size: 13px; color: var(--ink-muted); }
.status-line--error { color: var(--danger); }
.status-line--ok { color: #15803d; }

/* === Card preview === */
.story-card {
  position: relative;
  width: 100%;
  overflow: hidden;
  border-radius: var(--card-radius);
  box-shadow: 0 10px 30px rgba(15, 23, 42, 0.18);
  user-select: none;
}

.story-card__photo {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  z-index: 0;
}

.story-card__overlay {
  position: absolute;
  inset: 0;
  z-index: 5;
  pointer-events: none;
}

.story-card__surface {
  position: relative;
  z-index: 10;
  width: 100%;
  height: 100%;
  color: #f8fafc;
}

.card-block {
  position: absolute;
  display: flex;
  align-items: stretch;
  max-width: 95%;
}

.card-block__pill {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  border-radius: 999px;
  background: rgba(0, 0, 0, 0.35);
  padding: 4px 12px;
  font-size: 11px;
  backdrop-filter: blur(4px);
  cursor: grab;
}

.card-block__pill:active { cursor: grabbing; }
.card-block__pill:hover { background: rgba(0, 0, 0, 0.5); }

.card-block__title {
  min-width: 0;
  flex: 1;
  margin: 0;
  font-size: 15px;
  font-weight: 700;
  line-height: 1.5;
  overflow-wrap: break-word;
  border-radius: 6px;
  cursor: grab;
  text-shadow: 0 1px 6px rgba(15, 23, 42, 0.9);
}

.card-block__main {
  min-width: 0;
  flex: 1;
  margin: 0;
  font-size: 18px;
  font-weight: 600;
  line-height: 1.6;
  overflow-wrap: break-word;
  border-radius: 6px;
  cursor: grab;
  text-shadow: 0 1px 6px rgba(15, 23, 42, 0.9);
}

.card-block__secondary {
  min-width: 0;
  flex: 1;
  margin: 0;
  font-size: 13px;
  line-height: 1.6;
  overflow-wrap: break-word;
  border-radius: 6px;
  cursor: grab;
  text-shadow: 0 1px 4px rgba(15, 23, 42, 0.8);
}

.card-block__main:hover, .card-block__secondary:hover, .card-block__title:hover {
  background: rgba(255, 255, 255, 0.1);
}

.resize-handle {
  display: flex;
  width: 12px;
  flex-shrink: 0;
  align-items: center;
  justify-content: flex-end;
  padding-right: 2px;
  cursor: ew-resize;
  opacity: 0.6;
  font-size: 10px;
}

.resize-handle:hover { opacity: 1; }

.color-popover {
  position: absolute;
  left: 0;
  top: 100%;
  z-index: 20;
  margin-top: 8px;
  display: flex;
  align-items: center;
  gap: 8px;
  border-radius: 12px;
  background: rgba(255, 255, 255, 0.95);
  padding: 6px 12px;
  font-size: 11px;
  color: var(--ink-soft);
  box-shadow: 0 8px 20px rgba(15, 23, 42, 0.2);
}

.color-popover input[type="color"] {
  width: 22px;
  height: 22px;
  padding: 0;
  border: 1px solid var(--line);
  border-radius: 999px;
  background: white;
  cursor: pointer;
}

.preview-hint { font-size: 12px; color: var(--ink-muted); }

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  background: rgba(15, 23, 42, 0.45);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 24px;
}

.modal {
  width: 100%;
  max-width: 460px;
  max-height: 85vh;
  overflow-y: auto;
  background: white;
  border-radius: 20px;
  padding: 22px;
  display: flex;
  flex-direction: column;
  gap: 14px;
}

.modal__title { margin: 0; font-size: 17px; font-weight: 700; }

.modal__actions {
  display: flex;
  justify-content: flex-end;
  gap: 10px;
}

/* === Gallery === */
.gallery-scroll {
  height: calc(100vh - 57px);
  overflow-y: auto;
}

.gallery-intro {
  max-width: 900px;
  margin: 0 auto;
  padding: 28px 16px 12px;
  display: flex;
  align-items: flex-end;
  justify-content: space-between;
  gap: 12px;
}

.gallery-intro__title { margin: 0; font-size: 22px; font-weight: 800; }
.gallery-intro__sub { margin: 4px 0 0; font-size: 13px; color: var(--ink-muted); }

.gallery-list {
  position: relative;
  max-width: 900px;
  margin: 0 auto;
  padding: 0 16px 48px;
}

.gallery-row {
  position: absolute;
  left: 0;
  width: 100%;
  display: grid;
  gap: 14px;
  padding: 0 16px;
  align-content: start;
}

.gallery-card {
  flex: 1;
  min-width: 0;
  border: 1px solid var(--line);
  border-radius: 16px;
  overflow: hidden;
  background: white;
  text-align: left;
  padding: 0;
  display: flex;
  flex-direction: column;
}

.gallery-card:hover { box-shadow: 0 8px 20px rgba(15, 23, 42, 0.12); }

.gallery-card__img {
  width: 100%;
  aspect-ratio: 9 / 16;
  object-fit: cover;
  display: block;
  background: var(--paper-dim);
}

.gallery-card__caption { padding: 10px 12px 12px; }
.gallery-card__title {
  margin: 0;
  font-size: 13px;
  font-weight: 700;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}
.gallery-card__body {
  margin: 2px 0 0;
  font-size: 12px;
  color: var(--ink-muted);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.gallery-sentinel {
  display: flex;
  align-items: center;
  justify-content: center;
}

.gallery-status {
  padding: 32px 16px;
  text-align: center;
  font-size: 14px;
  color: var(--ink-muted);
}

.gallery-status__hint { margin-top: 6px; font-size: 12px; }

.gallery-detail__img {
  width: 100%;
  border-radius: 14px;
  display: block;
}

.gallery-detail__title { margin: 10px 0 0; font-size: 16px; font-weight: 700; }
.gallery-detail__body { margin: 6px 0 0; font-size: 13px; color: var(--ink-soft); white-space: pre-wrap; }
"#;
