//! The single HTML page served at `/`.

const OUTPUT_SLOT: &str = "{{ output }}";

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Recipe Generator</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css">
</head>
<body>
    <div class="container">
        <h1 class="my-4">Custom Recipe Generator</h1>
        <form id="tutorial-form" onsubmit="event.preventDefault(); generateTutorial();" class="mb-3">
            <div class="mb-3">
                <label for="components" class="form-label">Type the ingredients or any recipe name:</label>
                <input type="text" class="form-control" id="components" name="components" placeholder="Enter the ingredients or a recipe name..." required>
            </div>
            <button type="submit" class="btn btn-primary">Send to SwaadAI</button>
        </form>
        <div class="card">
            <div class="card-header d-flex justify-content-between align-items-center">
                Output:
                <button class="btn btn-secondary btn-sm" onclick="copyToClipboard()">Copy</button>
            </div>
            <div class="card-body">
                <p id="output" style="white-space: pre-wrap;">{{ output }}</p>
            </div>
            <footer>
                <hr>
                <h6>Made by Anirudh Melkaveri</h6>
            </footer>
        </div>
    </div>

    <script>
    async function generateTutorial() {
        const form = document.querySelector('#tutorial-form');
        const output = document.querySelector('#output');
        output.textContent = 'Generating a recipe for you...';

        try {
            const response = await fetch('/generate', {
                method: 'POST',
                body: new FormData(form)
            });

            if (!response.ok) {
                throw new Error('Failed to fetch');
            }

            output.textContent = await response.text();
        } catch (error) {
            output.textContent = 'Error generating recipe: ' + error.message;
        }
    }

    function copyToClipboard() {
        const recipeText = document.getElementById('output').textContent;
        const textarea = document.createElement('textarea');
        textarea.value = recipeText;
        document.body.appendChild(textarea);
        textarea.select();
        document.execCommand('copy');
        document.body.removeChild(textarea);
        alert('Copied to clipboard');
    }
    </script>
</body>
</html>
"#;

/// Renders the page with `output` placed in the output card, HTML-escaped.
pub fn render(output: &str) -> String {
    PAGE.replacen(OUTPUT_SLOT, &escape_html(output), 1)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
