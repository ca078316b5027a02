use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    let build_date = Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=SVGBOUNDS_BUILD_DATE={}", build_date);
}
