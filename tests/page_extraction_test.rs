use academy_md::page::extract_content;
use academy_md::Error;

const PAGE_URL: &str = "https://academy.hackthebox.com/module/15/section/90";

const LESSON_PAGE: &str = r#"
    <html>
      <head><title>Intro to Academy</title></head>
      <body>
        <nav class="navbar navbar-dark">
          <a href="/dashboard">Dashboard</a>
        </nav>
        <div class="container">
          <div class="training-module">
            <h4>Getting Started</h4>
            <p>Every module is split into sections.</p>
            <img src="/storage/modules/15/overview.png" alt="overview">
            <div class="card vpn-switch-card">
              <span>Connect to VPN to interact with the targets.</span>
            </div>
            <pre><code>[!bash!]$ ssh student@target</code></pre>
            <p>Sections end with questions.</p>
          </div>
        </div>
        <footer class="footer">Copyright HTB</footer>
      </body>
    </html>
"#;

#[test]
fn only_the_lesson_body_survives() {
    match extract_content(LESSON_PAGE, PAGE_URL) {
        Ok(content) => {
            assert!(content.contains("Every module is split into sections."));
            assert!(!content.contains("Dashboard"));
            assert!(!content.contains("Copyright HTB"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn the_vpn_switch_widget_is_removed() {
    let content = extract_content(LESSON_PAGE, PAGE_URL).unwrap();
    assert!(!content.contains("Connect to VPN"));
    assert!(!content.contains("vpn-switch-card"));
}

#[test]
fn content_after_the_widget_is_preserved() {
    // The widget sits in the middle of the lesson; removal must not cut
    // off what follows it.
    let content = extract_content(LESSON_PAGE, PAGE_URL).unwrap();
    assert!(content.contains("ssh student@target"));
    assert!(content.contains("Sections end with questions."));
}

#[test]
fn terminal_widgets_are_removed_by_id() {
    let html = r#"
        <html><body>
          <div class="training-module">
            <p>Spawn the target below.</p>
            <div id="screen-container"><canvas></canvas></div>
            <p>Then answer the question.</p>
          </div>
        </body></html>
    "#;

    let content = extract_content(html, PAGE_URL).unwrap();
    assert!(!content.contains("screen-container"));
    assert!(content.contains("Spawn the target below."));
    assert!(content.contains("Then answer the question."));
}

#[test]
fn relative_image_sources_become_absolute() {
    let content = extract_content(LESSON_PAGE, PAGE_URL).unwrap();
    assert!(content.contains("https://academy.hackthebox.com/storage/modules/15/overview.png"));
}

#[test]
fn absolute_image_sources_are_untouched() {
    let html = r#"
        <html><body>
          <div class="training-module">
            <img src="https://cdn.example.com/diagram.png">
          </div>
        </body></html>
    "#;

    let content = extract_content(html, PAGE_URL).unwrap();
    assert!(content.contains(r#"src="https://cdn.example.com/diagram.png""#));
}

#[test]
fn missing_lesson_body_aborts_with_a_page_dump() {
    let html = "<html><body><h1>503 Service Unavailable</h1></body></html>";

    match extract_content(html, PAGE_URL) {
        Ok(content) => panic!("expected Err(_), got Ok({content:?})"),
        Err(Error::ContentNotFound { url, page }) => {
            assert_eq!(url, PAGE_URL);
            assert!(page.contains("503 Service Unavailable"));
        }
        Err(err) => panic!("expected ContentNotFound, got {err:?}"),
    }
}
