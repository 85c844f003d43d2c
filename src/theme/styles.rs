//! Global CSS styles for the card.
//!
//! Warm rose and gold on cream, serif headings, script accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* CREAM (Backgrounds) */
  --cream: #fdf8f3;
  --soft-lavender: #f3e8f7;
  --card-bg: rgba(255, 255, 255, 0.82);

  /* ROSE (Accents, Hearts) */
  --rose-gold: #e8b4b8;
  --deep-rose: #c2185b;
  --deep-rose-glow: rgba(194, 24, 91, 0.25);
  --soft-pink: #f8d7de;

  /* GOLD (Titles, Highlights) */
  --romantic-gold: #d4a056;
  --gold-glow: rgba(212, 160, 86, 0.35);

  /* TEXT */
  --text-primary: #4a3b40;
  --text-secondary: #6b5a60;
  --text-muted: #9c8a90;

  /* STATUS */
  --good: #2e7d32;
  --bad: #c62828;

  /* FONTS */
  --font-serif: 'Playfair Display', Georgia, serif;
  --font-script: 'Dancing Script', 'Brush Script MT', cursive;
  --font-body: 'Lora', Georgia, serif;

  --radius: 1.25rem;
  --shadow: 0 10px 30px rgba(194, 24, 91, 0.12);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  min-height: 100%;
  background: linear-gradient(135deg, var(--cream) 0%, var(--soft-lavender) 55%, var(--rose-gold) 100%);
  background-attachment: fixed;
  color: var(--text-primary);
  font-family: var(--font-body);
  line-height: 1.6;
  overflow-x: hidden;
}

button {
  font: inherit;
  cursor: pointer;
}

button:disabled {
  cursor: not-allowed;
  opacity: 0.5;
}

/* === Page Layout === */
.page {
  position: relative;
  min-height: 100vh;
}

.page-header {
  position: relative;
  z-index: 20;
  max-width: 56rem;
  margin: 0 auto;
  padding: 1.5rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 1rem;
  flex-wrap: wrap;
}

.brand {
  font-family: var(--font-script);
  font-size: 1.6rem;
  color: var(--deep-rose);
}

.header-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  flex-wrap: wrap;
}

.hero {
  position: relative;
  z-index: 10;
  text-align: center;
  max-width: 56rem;
  margin: 0 auto;
  padding: 3rem 1.5rem 2rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.25rem;
}

.hero-title {
  font-family: var(--font-serif);
  font-size: clamp(2.2rem, 6vw, 4rem);
  font-weight: 700;
  background: linear-gradient(90deg, var(--deep-rose), var(--romantic-gold));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  animation: gentle-glow 4s ease-in-out infinite;
}

.hero-subtitle {
  font-family: var(--font-script);
  font-size: 1.8rem;
  color: var(--deep-rose);
}

.letter {
  position: relative;
  z-index: 10;
  max-width: 56rem;
  margin: 0 auto;
  padding: 0 1.5rem 3rem;
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.page-footer {
  position: relative;
  z-index: 10;
  text-align: center;
  padding: 2rem 1.5rem;
  color: var(--text-muted);
  font-size: 0.9rem;
}

.section-header {
  font-family: var(--font-serif);
  font-size: 1.8rem;
  color: var(--deep-rose);
  text-align: center;
}

/* === Love Cards === */
.love-card {
  background: var(--card-bg);
  backdrop-filter: blur(8px);
  border: 1px solid var(--soft-pink);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  padding: 2rem;
  animation: rise-in 0.8s ease-out both;
}

.love-text {
  font-size: 1.2rem;
  line-height: 1.9;
  color: var(--text-secondary);
}

.love-ornament {
  margin-top: 1rem;
  color: var(--romantic-gold);
  opacity: 0.6;
  font-size: 1.4rem;
}

.love-ornament.right {
  text-align: right;
  color: var(--rose-gold);
}

.love-signoff {
  margin-top: 1.5rem;
  text-align: center;
}

.love-badge {
  display: inline-block;
  padding: 0.9rem 1.6rem;
  border-radius: 999px;
  background: linear-gradient(90deg, var(--rose-gold), var(--romantic-gold));
  color: white;
  font-family: var(--font-script);
  font-size: 1.5rem;
  font-weight: 700;
  transition: transform 0.2s ease;
}

.love-badge:hover {
  transform: scale(1.05);
}

.signature {
  margin-top: 1.5rem;
  text-align: right;
}

.signature-lead {
  font-family: var(--font-script);
  font-size: 1.5rem;
  color: var(--deep-rose);
}

.signature-name {
  font-family: var(--font-script);
  font-size: 2.4rem;
  font-weight: 700;
  color: var(--romantic-gold);
}

/* === Song Titles === */
.song-title {
  color: var(--deep-rose);
  font-weight: 700;
  font-style: italic;
  cursor: pointer;
  border-bottom: 1px dashed var(--rose-gold);
  transition: color 0.2s ease, transform 0.2s ease;
}

.song-title:hover {
  color: var(--romantic-gold);
  text-decoration: underline;
}

.song-title.selected {
  color: var(--romantic-gold);
  border-bottom-style: solid;
  text-shadow: 0 0 12px var(--gold-glow);
}

.song-title.unavailable {
  color: var(--text-secondary);
  cursor: default;
  border-bottom: none;
}

.song-title.unavailable:hover {
  text-decoration: none;
}

.song-chip {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.3rem 0.9rem;
  border-radius: 999px;
  background: var(--soft-pink);
  color: var(--deep-rose);
  font-size: 0.9rem;
  border: none;
}

/* === Player === */
.player {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  min-width: 18rem;
  padding: 0.6rem 0.9rem;
  border-radius: var(--radius);
  background: var(--card-bg);
  box-shadow: var(--shadow);
}

.player.idle {
  min-width: 0;
  color: var(--text-muted);
  font-size: 0.9rem;
}

.player-icon {
  color: var(--deep-rose);
  font-size: 1.2rem;
}

.player-toggle {
  width: 2.5rem;
  height: 2.5rem;
  flex-shrink: 0;
  border-radius: 50%;
  border: none;
  background: var(--deep-rose);
  color: white;
  font-size: 1rem;
  box-shadow: 0 0 0 4px var(--deep-rose-glow);
}

.player-body {
  flex: 1;
  min-width: 0;
}

.player-title {
  font-weight: 600;
  color: var(--text-primary);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.player-timeline {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 0.75rem;
  color: var(--text-muted);
  font-variant-numeric: tabular-nums;
}

.player-seek {
  flex: 1;
  accent-color: var(--deep-rose);
}

.player-error {
  font-size: 0.8rem;
  color: var(--bad);
}

.player-notice {
  font-size: 0.8rem;
  color: var(--romantic-gold);
}

.player-loop {
  border: 1px solid var(--rose-gold);
  background: transparent;
  color: var(--text-muted);
  border-radius: 50%;
  width: 2rem;
  height: 2rem;
}

.player-loop.active {
  background: var(--rose-gold);
  color: white;
}

/* === Relationship Timer === */
.timer {
  text-align: center;
}

.timer-caption {
  font-family: var(--font-script);
  font-size: 1.4rem;
  color: var(--deep-rose);
}

.timer-units {
  display: grid;
  grid-template-columns: repeat(4, minmax(4.5rem, 1fr));
  gap: 0.75rem;
  margin: 0.75rem 0;
}

.timer-unit {
  display: flex;
  flex-direction: column;
  padding: 0.75rem;
  border-radius: 1rem;
  background: var(--card-bg);
  box-shadow: var(--shadow);
}

.timer-value {
  font-family: var(--font-serif);
  font-size: 1.8rem;
  font-weight: 700;
  color: var(--romantic-gold);
  font-variant-numeric: tabular-nums;
}

.timer-label {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--text-muted);
}

.timer-since {
  font-size: 0.85rem;
  color: var(--text-muted);
}

/* === Floating Hearts === */
.floating-hearts {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: 0;
}

.floating-heart {
  position: absolute;
  bottom: -3rem;
  opacity: 0;
  animation-name: float-up;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
}

/* === Buttons === */
.btn-primary {
  padding: 0.65rem 1.4rem;
  border: none;
  border-radius: 999px;
  background: linear-gradient(90deg, var(--deep-rose), var(--romantic-gold));
  color: white;
  font-weight: 600;
  box-shadow: 0 6px 18px var(--deep-rose-glow);
  transition: transform 0.2s ease, box-shadow 0.2s ease;
}

.btn-primary:hover:not(:disabled) {
  transform: translateY(-1px);
  box-shadow: 0 8px 24px var(--deep-rose-glow);
}

.btn-ghost {
  padding: 0.55rem 1.1rem;
  border: 2px solid var(--deep-rose);
  border-radius: 999px;
  background: transparent;
  color: var(--deep-rose);
  font-family: var(--font-script);
  font-size: 1.1rem;
  transition: background 0.2s ease, color 0.2s ease;
}

.btn-ghost:hover {
  background: var(--deep-rose);
  color: white;
}

/* === Input Fields === */
.input-field {
  width: 100%;
  padding: 0.6rem 0.9rem;
  border: 1px solid var(--rose-gold);
  border-radius: 0.75rem;
  background: white;
  color: var(--text-primary);
  font: inherit;
}

.input-field:focus {
  outline: none;
  border-color: var(--deep-rose);
  box-shadow: 0 0 0 3px var(--deep-rose-glow);
}

.manifest-input {
  display: flex;
  gap: 0.5rem;
  margin: 1rem 0;
}

.field-label {
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-muted);
}

/* === Personalize === */
.personalize {
  position: relative;
}

.personalize-panel {
  position: absolute;
  right: 0;
  top: calc(100% + 0.5rem);
  z-index: 30;
  width: 16rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 1rem;
  border-radius: var(--radius);
  background: white;
  box-shadow: var(--shadow);
  animation: rise-in 0.25s ease-out both;
}

/* === Letter Generator === */
.generator {
  max-width: 56rem;
  margin: 0 auto 2rem;
  position: relative;
  z-index: 10;
  text-align: center;
}

.generator-title {
  font-family: var(--font-serif);
  font-size: 1.8rem;
  color: var(--deep-rose);
}

.generator-subtitle {
  color: var(--text-muted);
  margin-bottom: 1rem;
}

.generator-status {
  font-family: var(--font-script);
  font-size: 1.3rem;
  color: var(--romantic-gold);
  animation: pulse-soft 1.5s ease-in-out infinite;
}

.generated-letter {
  margin-top: 1.5rem;
  text-align: left;
  animation: rise-in 0.6s ease-out both;
}

.letter-body {
  white-space: pre-line;
  font-size: 1.1rem;
  line-height: 1.8;
  color: var(--text-secondary);
  margin: 1rem 0;
}

.letter-share {
  display: flex;
  gap: 0.5rem;
  flex-wrap: wrap;
}

/* === Share Section === */
.share-section {
  max-width: 56rem;
  margin: 0 auto 2rem;
  position: relative;
  z-index: 10;
  text-align: center;
}

.share-buttons {
  display: flex;
  justify-content: center;
  gap: 0.75rem;
  flex-wrap: wrap;
  margin-top: 1rem;
}

.share-btn {
  padding: 0.6rem 1.2rem;
  border-radius: 999px;
  border: 1px solid var(--rose-gold);
  background: white;
  color: var(--deep-rose);
  transition: transform 0.2s ease;
}

.share-btn:hover {
  transform: translateY(-2px);
}

.share-notice {
  margin-top: 0.75rem;
  color: var(--good);
  font-size: 0.9rem;
}

/* === Secret Puzzle === */
.puzzle {
  text-align: center;
}

.puzzle-title {
  font-family: var(--font-serif);
  font-size: 2rem;
  color: var(--deep-rose);
}

.puzzle-subtitle {
  font-family: var(--font-script);
  font-size: 1.3rem;
  color: var(--text-muted);
}

.puzzle-progress {
  display: flex;
  justify-content: center;
  gap: 0.75rem;
  margin: 1.25rem 0;
}

.puzzle-step {
  width: 2rem;
  height: 2rem;
  border-radius: 50%;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  background: var(--soft-pink);
  color: var(--text-muted);
  font-weight: 700;
}

.puzzle-step.current {
  background: var(--deep-rose);
  color: white;
  box-shadow: 0 0 0 4px var(--deep-rose-glow);
}

.puzzle-step.done {
  background: var(--romantic-gold);
  color: white;
}

.puzzle-stage {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
}

.stage-title {
  font-family: var(--font-serif);
  font-size: 1.3rem;
  color: var(--text-primary);
}

.stage-question {
  font-size: 1.15rem;
  font-style: italic;
  color: var(--text-secondary);
}

.hint-text {
  font-size: 0.85rem;
  color: var(--text-muted);
}

.puzzle-hint {
  padding: 0.75rem 1rem;
  border-radius: 0.75rem;
  background: var(--soft-pink);
  color: var(--deep-rose);
}

.puzzle-feedback {
  margin-top: 1rem;
  font-weight: 600;
}

.puzzle-feedback.good {
  color: var(--good);
}

.puzzle-feedback.bad {
  color: var(--bad);
}

.puzzle-big {
  font-size: 3rem;
}

.puzzle-blocked,
.puzzle-unlocked {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  padding: 1rem 0;
}

.puzzle-unlocked {
  animation: pulse-soft 1.2s ease-in-out infinite;
}

.heart-row {
  display: flex;
  justify-content: center;
  gap: 1rem;
  margin: 0.5rem 0;
}

.heart-row.wrong {
  animation: shake 0.4s ease-in-out;
}

.heart-btn {
  position: relative;
  width: 4rem;
  height: 4rem;
  border: none;
  border-radius: 50%;
  background: var(--soft-pink);
  color: var(--deep-rose);
  font-size: 1.2rem;
  transition: transform 0.15s ease, background 0.15s ease;
}

.heart-btn::before {
  content: "\2665";
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 2.6rem;
  opacity: 0.35;
}

.heart-btn:hover {
  transform: scale(1.08);
}

.heart-btn.clicked {
  background: var(--deep-rose);
  color: white;
}

.heart-row.wrong .heart-btn.clicked {
  background: var(--bad);
}

.heart-number {
  position: relative;
  font-weight: 700;
}

.heart-order {
  position: absolute;
  top: -0.4rem;
  right: -0.4rem;
  width: 1.4rem;
  height: 1.4rem;
  border-radius: 50%;
  background: var(--romantic-gold);
  color: white;
  font-size: 0.75rem;
  display: flex;
  align-items: center;
  justify-content: center;
}

.choice-list {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  width: 100%;
  max-width: 24rem;
}

.choice-btn {
  padding: 0.7rem 1rem;
  border: 1px solid var(--rose-gold);
  border-radius: 0.75rem;
  background: white;
  color: var(--text-primary);
  text-align: left;
}

.choice-btn.selected {
  border-color: var(--deep-rose);
  background: var(--soft-pink);
  color: var(--deep-rose);
  font-weight: 600;
}

/* === Secret Letter === */
.secret-content {
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.secret-heading {
  text-align: center;
}

.secret-title {
  font-family: var(--font-serif);
  font-size: clamp(2rem, 5vw, 3rem);
  color: var(--deep-rose);
}

.secret-subtitle {
  font-family: var(--font-script);
  font-size: 1.5rem;
  font-style: italic;
  color: var(--romantic-gold);
}

.secret-song {
  font-weight: 700;
  color: var(--romantic-gold);
}

/* === Enable Music Overlay === */
.unlock-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.5);
  backdrop-filter: blur(4px);
}

.unlock-card {
  width: 100%;
  max-width: 28rem;
  padding: 2rem;
  text-align: center;
  border: 2px solid var(--romantic-gold);
  border-radius: var(--radius);
  background: linear-gradient(135deg, var(--cream), var(--soft-lavender));
  box-shadow: 0 20px 50px rgba(0, 0, 0, 0.25);
  animation: rise-in 0.4s ease-out both;
}

.unlock-icon {
  font-size: 3rem;
  color: var(--deep-rose);
  animation: spin 2s linear infinite;
}

.unlock-title {
  font-family: var(--font-serif);
  font-size: 1.6rem;
  color: var(--deep-rose);
  margin: 0.75rem 0;
}

.unlock-text {
  color: var(--text-secondary);
  margin-bottom: 1.5rem;
}

/* === Animations === */
@keyframes spin {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}

@keyframes float-up {
  0% { transform: translateY(0) rotate(0deg); opacity: 0; }
  10% { opacity: 0.7; }
  90% { opacity: 0.5; }
  100% { transform: translateY(-110vh) rotate(25deg); opacity: 0; }
}

@keyframes gentle-glow {
  0%, 100% { filter: drop-shadow(0 0 0 transparent); }
  50% { filter: drop-shadow(0 0 10px var(--gold-glow)); }
}

@keyframes pulse-soft {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.6; }
}

@keyframes rise-in {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes shake {
  0%, 100% { transform: translateX(0); }
  25% { transform: translateX(-6px); }
  75% { transform: translateX(6px); }
}

/* === Responsive === */
@media (max-width: 640px) {
  .page-header {
    justify-content: center;
  }

  .timer-units {
    grid-template-columns: repeat(2, 1fr);
  }

  .love-card {
    padding: 1.25rem;
  }

  .heart-btn {
    width: 3.2rem;
    height: 3.2rem;
  }
}
"#;
