#[macro_export]
macro_rules! define_commands {
    ($($cmd:ident$(, $alias:ident)? => $($struct:ident)::+),+$(,)?) => {
        #[derive(::clap::Subcommand, Debug)]
        enum Commands {
            $(
                $(#[command(alias = stringify!($alias))])?
                $cmd($($struct)::+)
            ),+,
        }

        impl Commands {
            fn execute(self) -> eyre::Result<()> {
                use crate::commands::Command;

                fn _type_check<F: crate::commands::Command>(_a: &F) {}

                match self {
                    $(Self::$cmd(inner) => {
                        _type_check(&inner);
                        inner.execute()
                    }),+,
                }
            }
        }
    };
}
