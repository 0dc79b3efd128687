//! Page served at `/` when no UI bundle has been built into the ui dir.

pub const SHELL_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Ergo-dash Dashboard</title>
    <link rel="stylesheet" href="/ui/style.css" />
  </head>
  <body>
    <div id="loading" class="loading">Loading dashboard&hellip;</div>
    <noscript>Ergo-dash needs JavaScript and WebAssembly. Raw data: <a href="/api/dashboard">/api/dashboard</a></noscript>
    <script type="module">
      import init from "/ui/ergo-ui.js";
      init("/ui/ergo-ui_bg.wasm").catch((err) => {
        document.getElementById("loading").textContent =
          "UI bundle unavailable (" + err + "). Raw data is at /api/dashboard.";
      });
    </script>
  </body>
</html>
"#;
