//! Page shells for the start and review views. Templates are plain consts
//! with `{{SLOT}}` replacement; the review page script drives the JSON API
//! and owns the loading / results / error view toggling.

pub fn render_index(error: Option<&str>) -> String {
    let error_block = match error {
        Some(message) => format!(
            r#"<div class="status" data-type="error">{}</div>"#,
            escape_html(message)
        ),
        None => String::new(),
    };
    INDEX_HTML.replace("{{ERROR_BLOCK}}", &error_block)
}

pub fn render_review(athlete_name: &str, year: i32) -> String {
    REVIEW_HTML
        .replace("{{ATHLETE}}", &escape_html(athlete_name))
        .replace("{{YEAR}}", &year.to_string())
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Kudos Review</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #fcd9c2;
      --ink: #2b2a28;
      --accent: #fc4c02;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(640px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 40px;
      display: grid;
      gap: 24px;
      text-align: center;
      animation: rise 600ms ease;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1.05rem;
    }

    .connect {
      display: inline-flex;
      justify-content: center;
      align-items: center;
      gap: 10px;
      margin: 0 auto;
      border: none;
      border-radius: 999px;
      padding: 16px 32px;
      font-size: 1.05rem;
      font-weight: 600;
      color: white;
      background: var(--accent);
      box-shadow: 0 10px 24px rgba(252, 76, 2, 0.3);
      text-decoration: none;
      transition: transform 150ms ease;
    }

    .connect:active {
      transform: scale(0.98);
    }

    .status {
      font-size: 0.95rem;
      min-height: 1.2em;
    }

    .status[data-type='error'] {
      color: #c63b2b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>Kudos Review</h1>
    <p class="subtitle">See who cheered you on this year.</p>
    {{ERROR_BLOCK}}
    <a class="connect" href="/login">Connect with Strava</a>
    <p class="hint">Read-only access to your activities. Nothing is stored beyond this session.</p>
  </main>
</body>
</html>
"#;

const REVIEW_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Kudos Review</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #fcd9c2;
      --ink: #2b2a28;
      --accent: #fc4c02;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    #chart {
      width: 100%;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .bar {
      fill: var(--accent);
    }

    .bar-name {
      fill: var(--accent-2);
      font-size: 13px;
    }

    .bar-count {
      fill: #7a746d;
      font-size: 12px;
    }

    #loading,
    #error {
      text-align: center;
      color: #6b645d;
    }

    #error {
      color: #c63b2b;
    }

    .spinner {
      width: 36px;
      height: 36px;
      margin: 0 auto 12px;
      border-radius: 50%;
      border: 4px solid rgba(47, 72, 88, 0.15);
      border-top-color: var(--accent);
      animation: spin 900ms linear infinite;
    }

    .hidden {
      display: none;
    }

    .restart {
      color: var(--accent-2);
      font-size: 0.9rem;
    }

    @keyframes spin {
      to {
        transform: rotate(360deg);
      }
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Your {{YEAR}} kudos</h1>
      <p class="subtitle">Connected as <strong id="athlete-name">{{ATHLETE}}</strong></p>
    </header>

    <div id="loading">
      <div class="spinner"></div>
      <p>Fetching your activities and counting kudos. This can take a moment.</p>
    </div>

    <section id="results" class="hidden">
      <div class="panel">
        <div class="stat">
          <span class="label">Activities</span>
          <span id="total-activities" class="value">0</span>
        </div>
        <div class="stat">
          <span class="label">Total kudos</span>
          <span id="total-kudos" class="value">0</span>
        </div>
      </div>
      <div class="chart-card">
        <svg id="chart" aria-label="Top kudos givers" role="img"></svg>
      </div>
    </section>

    <div id="error" class="hidden">
      <p id="error-message"></p>
      <p class="restart"><a href="/">Back to start</a></p>
    </div>
  </main>

  <script>
    const loadingEl = document.getElementById('loading');
    const resultsEl = document.getElementById('results');
    const errorEl = document.getElementById('error');
    const errorMessageEl = document.getElementById('error-message');
    const chartEl = document.getElementById('chart');

    const showLoading = () => {
      loadingEl.classList.remove('hidden');
      resultsEl.classList.add('hidden');
      errorEl.classList.add('hidden');
    };

    const showError = (message) => {
      loadingEl.classList.add('hidden');
      resultsEl.classList.add('hidden');
      errorEl.classList.remove('hidden');
      errorMessageEl.textContent = message;
    };

    const displayAthleteName = (name) => {
      document.getElementById('athlete-name').textContent = name;
    };

    const renderBarChart = (ranked) => {
      if (!ranked.length) {
        chartEl.setAttribute('viewBox', '0 0 600 60');
        chartEl.innerHTML = '<text class="bar-count" x="50%" y="50%" text-anchor="middle">No kudos yet this year</text>';
        return;
      }

      const width = 600;
      const rowHeight = 28;
      const nameWidth = 170;
      const countWidth = 40;
      const height = ranked.length * rowHeight + 10;
      const max = ranked[0].count;
      const barMax = width - nameWidth - countWidth - 10;

      const rows = ranked
        .map((entry, index) => {
          const y = index * rowHeight + 8;
          const barWidth = Math.max((entry.count / max) * barMax, 2);
          return `
            <text class="bar-name" x="${nameWidth - 8}" y="${y + 14}" text-anchor="end">${escapeText(entry.name)}</text>
            <rect class="bar" x="${nameWidth}" y="${y}" width="${barWidth.toFixed(1)}" height="${rowHeight - 10}" rx="5" />
            <text class="bar-count" x="${nameWidth + barWidth + 8}" y="${y + 13}">${entry.count}</text>`;
        })
        .join('');

      chartEl.setAttribute('viewBox', `0 0 ${width} ${height}`);
      chartEl.innerHTML = rows;
    };

    const escapeText = (value) =>
      value.replace(/&/g, '&amp;').replace(/</g, '&lt;').replace(/>/g, '&gt;');

    const showResults = (ranked, totalActivities, totalKudos) => {
      loadingEl.classList.add('hidden');
      errorEl.classList.add('hidden');
      resultsEl.classList.remove('hidden');
      document.getElementById('total-activities').textContent = totalActivities;
      document.getElementById('total-kudos').textContent = totalKudos;
      renderBarChart(ranked);
    };

    const load = async () => {
      showLoading();
      const res = await fetch('/api/kudos');
      if (res.status === 401) {
        window.location.href = '/';
        return;
      }
      if (!res.ok) {
        showError(await res.text());
        return;
      }
      const report = await res.json();
      displayAthleteName(report.athlete_name);
      showResults(report.ranked, report.total_activities, report.total_kudos);
    };

    load().catch((err) => showError('Error loading data: ' + err.message));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_shows_flash_error_escaped() {
        let page = render_index(Some("<script>bad</script>"));
        assert!(page.contains("&lt;script&gt;bad&lt;/script&gt;"));
        assert!(!page.contains("<script>bad"));
    }

    #[test]
    fn index_without_error_has_no_status_block() {
        let page = render_index(None);
        assert!(!page.contains(r#"data-type="error""#));
    }

    #[test]
    fn review_embeds_athlete_and_year() {
        let page = render_review("Jo Lin", 2025);
        assert!(page.contains("Jo Lin"));
        assert!(page.contains("Your 2025 kudos"));
    }
}
