use chrono::Datelike;

fn main() {
    // Capture the build year for the footer so SSR and hydration agree
    let build_year = chrono::Utc::now().year();
    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Webhook for the contact form; absent means the form reports a failure on submit
    if let Ok(url) = std::env::var("CONTACT_WEBHOOK_URL") {
        println!("cargo:rustc-env=CONTACT_WEBHOOK_URL={}", url);
    }

    println!("cargo:rerun-if-env-changed=CONTACT_WEBHOOK_URL");
    println!("cargo:rerun-if-changed=build.rs");
}
