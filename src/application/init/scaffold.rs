//! Front-end scaffold (Vite + React)

/// Relative path and content of each generated file, in write order.
/// `index.html` is handled separately since it may come from `public/`.
pub(super) const FILES: &[(&str, &str)] = &[
    ("package.json", PACKAGE_JSON),
    ("vite.config.js", VITE_CONFIG),
    ("src/main.jsx", MAIN_JSX),
    ("src/App.jsx", APP_JSX),
];

const PACKAGE_JSON: &str = r#"{
  "name": "frontend",
  "private": true,
  "version": "0.1.0",
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "preview": "vite preview"
  },
  "dependencies": {
    "react": "^18.3.1",
    "react-dom": "^18.3.1"
  },
  "devDependencies": {
    "@vitejs/plugin-react": "^4.3.1",
    "vite": "^5.4.2"
  }
}"#;

const VITE_CONFIG: &str = "import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'

export default defineConfig({
  plugins: [react()],
})
";

pub(super) const DEFAULT_INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <meta name="theme-color" content="#0F172A" />
    <meta name="description" content="Modern web application powered by React" />
    <title>BFF Template</title>
  </head>
  <body>
    <noscript>You need to enable JavaScript to run this app.</noscript>
    <div id="root"></div>
    <script type="module" src="/src/main.jsx"></script>
  </body>
</html>
"##;

const MAIN_JSX: &str = "import React from 'react'
import ReactDOM from 'react-dom/client'
import App from './App.jsx'

ReactDOM.createRoot(document.getElementById('root')).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
)
";

const APP_JSX: &str = "function App() {
  return (
    <div>
      <h1>Welcome to React + Vite</h1>
      <p>Your custom index.html is loaded!</p>
    </div>
  )
}

export default App
";
