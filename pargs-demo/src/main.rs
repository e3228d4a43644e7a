use anyhow::Context as _;
use pargs::Target;

#[derive(Target, Debug, Default)]
struct Arguments {
    #[pargs("flag:friend")]
    friend: bool,

    #[pargs("flag:l;loud")]
    loud: bool,
}

fn main() -> anyhow::Result<()> {
    let mut args = Arguments::default();
    pargs::parse(&mut args, None).context("failed to parse command line arguments")?;

    let greeting = match args.friend {
        true => "Hello, friend !",
        false => "Hello stranger !",
    };

    match args.loud {
        true => println!("{}", greeting.to_uppercase()),
        false => println!("{greeting}"),
    }

    Ok(())
}
