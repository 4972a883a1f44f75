//! UUID v4를 지정한 개수만큼 출력합니다.

use clap::Parser;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "uuid_maker", about = "UUID v4を生成します")]
struct Args {
    /// 생성 개수
    #[arg(short = 'n', long = "count", default_value_t = 1)]
    count: usize,
}

fn main() {
    let args = Args::parse();

    for _ in 0..args.count {
        println!("{}", Uuid::new_v4());
    }
}
