/// Question prefilled in the form
pub const DEFAULT_QUESTION: &str = "What this paper is talking about?";

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Quest Analytics QA Bot</title>
<style>
  body { font-family: sans-serif; max-width: 1100px; margin: 2rem auto; padding: 0 1rem; }
  .row { display: flex; gap: 2rem; }
  .col { flex: 1; display: flex; flex-direction: column; gap: .75rem; }
  blockquote { border-left: 4px solid #ccc; margin: 0; padding: .25rem 1rem; color: #555; }
  textarea { width: 100%; font-family: monospace; }
</style>
</head>
<body>
<h1>Quest Analytics QA Bot</h1>
<p>Upload a PDF and ask questions about it.</p>
<blockquote>
  <strong>Note</strong>: This application uses the {{MODEL}} model, which requires users
  to agree to share contact information. Make sure your Hugging Face account
  (associated with the API token) has accepted the model terms.
</blockquote>
<div class="row">
  <form class="col" id="ask" action="/ask" method="post" enctype="multipart/form-data">
    <label>Upload PDF <input type="file" name="pdf" accept=".pdf"></label>
    <label>Your Question <input type="text" name="query" value="{{QUESTION}}" size="50"></label>
    <button type="submit">Ask Question</button>
  </form>
  <div class="col">
    <label for="response">Response</label>
    <textarea id="response" rows="20" readonly></textarea>
  </div>
</div>
<script>
  document.getElementById("ask").addEventListener("submit", async (event) => {
    event.preventDefault();
    const out = document.getElementById("response");
    out.value = "Working...";
    const res = await fetch("/ask", { method: "POST", body: new FormData(event.target) });
    out.value = await res.text();
  });
</script>
</body>
</html>
"#;

/// Render the QA form for the configured model
pub fn render(model: &str) -> String {
    let model = model.rsplit('/').next().unwrap_or(model);
    PAGE.replace("{{MODEL}}", model).replace("{{QUESTION}}", DEFAULT_QUESTION)
}
