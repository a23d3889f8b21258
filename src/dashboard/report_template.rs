//! Static markup for the dashboard snapshot report.

pub const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Insights Dashboard</title>
    <style>
        :root {
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
            --color-muted: #64748b;
            --color-failed: #ef4444;
            --color-live: #22c55e;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1400px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 0.5rem; }
        .range { font-size: 0.875rem; color: var(--color-text-muted); margin-bottom: 1.5rem; }
        .card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(400px, 1fr)); gap: 1.5rem; }
        .card { background: var(--color-card); border-radius: 0.75rem; padding: 1.5rem; border: 1px solid var(--color-border); overflow-x: auto; }
        .card h3 { font-size: 0.875rem; font-weight: 600; color: var(--color-text-muted); margin-bottom: 1rem; }
        .card.failed { border-color: var(--color-failed); }
        .card .error { color: var(--color-failed); font-size: 0.875rem; }
        .stat .value { font-size: 2.25rem; font-weight: 700; display: block; }
        .stat .updated { font-size: 0.75rem; color: var(--color-text-muted); }
        .stat ul { list-style: none; margin-top: 0.75rem; font-size: 0.875rem; }
        .stat li { display: flex; justify-content: space-between; padding: 0.25rem 0; border-top: 1px solid var(--color-border); }
        table { width: 100%; border-collapse: collapse; font-size: 0.875rem; }
        th, td { padding: 0.5rem 0.25rem; text-align: left; border-bottom: 1px solid var(--color-border); }
        th { font-weight: 600; color: var(--color-text-muted); }
        tr:last-child td { border-bottom: none; }
        .more { margin-top: 0.5rem; font-size: 0.75rem; color: var(--color-text-muted); }
        .no-results { padding: 1rem; text-align: center; color: var(--color-text-muted); }
        .legend { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-top: 0.75rem; font-size: 0.75rem; }
        .legend .swatch { display: inline-block; width: 0.75rem; height: 0.75rem; border-radius: 2px; margin-right: 0.25rem; vertical-align: middle; }
        .card svg rect { transition: opacity 0.15s ease; }
        .card svg rect:hover { opacity: 0.85; }
        .card svg circle:hover { stroke-width: 3; }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
        @media print {
            body { background: white; padding: 1rem; }
            .card { border: 1px solid #333; break-inside: avoid; }
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Insights Dashboard</h1>
"#;

pub const HTML_FOOTER: &str = r#"        <div class="footer">
            Generated by <strong>insights-dash</strong>
        </div>
    </div>
</body>
</html>
"#;
