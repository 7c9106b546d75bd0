// Inkpad - a file-backed web document manager built with Rust
// Copyright (C) 2026 Inkpad Project Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tera::Tera;

pub fn init_templates(templates_dir: &str) -> Result<Arc<Tera>> {
    // Create templates directory if it doesn't exist
    std::fs::create_dir_all(templates_dir).context("Failed to create templates directory")?;

    // Create default templates if they don't exist
    create_default_templates(templates_dir)?;

    let tera = Tera::new(&format!("{}/**/*.html", templates_dir))
        .context("Failed to load templates")?;

    Ok(Arc::new(tera))
}

fn create_default_templates(templates_dir: &str) -> Result<()> {
    let base_dir = Path::new(templates_dir);

    let base_template = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{% block title %}Inkpad{% endblock %}</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            color: #333;
        }
        nav {
            border-bottom: 1px solid #eee;
            padding-bottom: 10px;
            margin-bottom: 20px;
        }
        nav a {
            margin-right: 15px;
            text-decoration: none;
            color: #0066cc;
        }
        nav a:hover {
            text-decoration: underline;
        }
        .auth-info {
            float: right;
            font-size: 0.9em;
        }
        .flash {
            padding: 8px 12px;
            border-radius: 4px;
            margin-bottom: 15px;
        }
        .flash.success { background: #e6f7e6; color: #215b21; }
        .flash.error { background: #fbe8e8; color: #7a1f1f; }
        .flash.message { background: #e8f0fb; color: #1f3d7a; }
        form.inline { display: inline; }
        textarea { width: 100%; font-family: monospace; }
    </style>
</head>
<body>
    <nav>
        <a href="/">All documents</a>
        <span class="auth-info">
        {% if current_user %}
            Signed in as {{ current_user }}
            <form method="post" action="/signout" class="inline">
                <button type="submit">Sign out</button>
            </form>
        {% else %}
            <a href="/signin">Sign in</a>
        {% endif %}
        </span>
    </nav>
    {% if flash_success %}<p class="flash success">{{ flash_success }}</p>{% endif %}
    {% if flash_error %}<p class="flash error">{{ flash_error }}</p>{% endif %}
    {% if flash_message %}<p class="flash message">{{ flash_message }}</p>{% endif %}
    {% block content %}{% endblock %}
</body>
</html>
"#;

    let index_template = r#"{% extends "base.html" %}
{% block title %}Documents - Inkpad{% endblock %}
{% block content %}
<h1>Documents</h1>
<ul>
    {% for file in files %}
    <li>
        <a href="/{{ file }}">{{ file }}</a>
        <a href="/{{ file }}/edit">edit</a>
        <form method="post" action="/{{ file }}/delete" class="inline">
            <button type="submit">delete</button>
        </form>
    </li>
    {% endfor %}
</ul>
<p><a href="/new/document">New document</a></p>
{% endblock %}
"#;

    let signin_template = r#"{% extends "base.html" %}
{% block title %}Sign in - Inkpad{% endblock %}
{% block content %}
<h1>Sign in</h1>
{% if error %}<p class="flash error">{{ error }}</p>{% endif %}
<form method="post" action="/signin">
    <p>
        <label for="username">Username</label>
        <input type="text" id="username" name="username" value="{{ username | default(value='') }}">
    </p>
    <p>
        <label for="password">Password</label>
        <input type="password" id="password" name="password">
    </p>
    <p><button type="submit">Sign in</button></p>
</form>
{% endblock %}
"#;

    let new_template = r#"{% extends "base.html" %}
{% block title %}New document - Inkpad{% endblock %}
{% block content %}
<h1>Add a new document</h1>
{% if error %}<p class="flash error">{{ error }}</p>{% endif %}
<form method="post" action="/new/document">
    <p>
        <label for="name">Name (.txt or .md)</label>
        <input type="text" id="name" name="name" value="{{ name | default(value='') }}">
    </p>
    <p><button type="submit">Create</button></p>
</form>
{% endblock %}
"#;

    let edit_template = r#"{% extends "base.html" %}
{% block title %}Edit {{ name }} - Inkpad{% endblock %}
{% block content %}
<h1>Edit {{ name }}</h1>
<form method="post" action="/{{ name }}">
    <p><textarea name="content" rows="20">{{ content }}</textarea></p>
    <p><button type="submit">Save changes</button></p>
</form>
{% endblock %}
"#;

    let document_template = r#"{% extends "base.html" %}
{% block title %}{{ name }} - Inkpad{% endblock %}
{% block content %}
{{ content | safe }}
{% endblock %}
"#;

    let templates = [
        ("base.html", base_template),
        ("index.html", index_template),
        ("signin.html", signin_template),
        ("new.html", new_template),
        ("edit.html", edit_template),
        ("document.html", document_template),
    ];

    for (name, content) in templates {
        let path = base_dir.join(name);
        if !path.exists() {
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write default template {}", name))?;
        }
    }

    Ok(())
}
