//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 배너와 배치 실행 결과를 박스 형태로 출력합니다.

pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 서버 기동 배너
pub fn print_startup_banner(bind_address: &str, environment: &str) {
    println!();
    print_boxed_title("🚀 ADMIN API SERVER");
    print_sub_task("Version", env!("CARGO_PKG_VERSION"));
    print_sub_task("Environment", environment);
    print_sub_task("Listen", bind_address);
    println!();
}

/// 배치 시작/종료 표시
pub fn print_batch_boundary(name: &str, started: bool) {
    if started {
        println!("{}を開始します。", name);
    } else {
        println!("{}を終了します。", name);
    }
}
