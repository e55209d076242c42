use time::OffsetDateTime;
use time::macros::format_description;

fn main() {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let build_time = now
        .format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second] [offset_hour sign:mandatory]:[offset_minute]"))
        .expect("format build time");
    println!("cargo:rustc-env=PP_BUILD_TIME={build_time}");
    println!("cargo:rerun-if-changed=build.rs");
}
